//! Web gateway: JSON API over HTTP.
//!
//! ```text
//! POST /api/chat          {message, userProfile?} -> {response}
//! POST /api/chat/welcome  {userProfile?}          -> {greeting, suggestions}
//! GET  /api/dashboard                             -> demo profile + recommendations
//! POST /api/dashboard     UserProfile             -> {profile, recommendations, learningPaths}
//! GET  /api/courses                               -> {courses}
//! POST /api/courses       NewCourse               -> {message, course}
//! POST /api/auth/login    {email, password}       -> {success, user?, message}
//! GET  /api/health                                -> {status, service}
//! ```

pub mod handlers;
pub mod server;
pub mod types;

pub use server::{GatewayState, start_server};

//! Command-line interface.
//!
//! `serve` runs the web gateway; `ask` and `recommend` run the guidance engine
//! once and print the result, which is handy for checking templates without a
//! browser.

mod ask;
mod serve;

pub use ask::{run_ask_command, run_recommend_command};
pub use serve::run_serve_command;

use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};
use eduai_guidance::UserProfile;

#[derive(Parser, Debug)]
#[command(name = "eduai", version, about = "Career guidance chat and dashboard service")]
pub struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the web gateway.
    Serve {
        /// Override GATEWAY_HOST.
        #[arg(long)]
        host: Option<IpAddr>,

        /// Override GATEWAY_PORT.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Answer one chat message and print the response.
    Ask {
        /// The message, as a user would type it.
        message: String,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Skip the text-generation call even if an API key is configured.
        #[arg(long)]
        templates_only: bool,
    },

    /// Print dashboard recommendations as JSON.
    Recommend {
        #[arg(long)]
        degree: String,

        #[arg(long, default_value = "")]
        goals: String,
    },
}

/// Profile fields for `ask`. Leaving all of them out asks without a profile.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub degree: Option<String>,
    #[arg(long)]
    pub experience: Option<String>,
    #[arg(long)]
    pub goals: Option<String>,
    #[arg(long)]
    pub qualifications: Option<String>,
}

impl ProfileArgs {
    pub fn into_profile(self) -> Option<UserProfile> {
        let Self {
            name,
            degree,
            experience,
            goals,
            qualifications,
        } = self;
        if [&name, &degree, &experience, &goals, &qualifications]
            .iter()
            .all(|field| field.is_none())
        {
            return None;
        }
        Some(UserProfile {
            name: name.unwrap_or_default(),
            degree: degree.unwrap_or_default(),
            qualifications: qualifications.unwrap_or_default(),
            experience: experience.unwrap_or_default(),
            career_goals: goals.unwrap_or_default(),
        })
    }
}

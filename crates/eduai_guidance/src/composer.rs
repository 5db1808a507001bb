//! Templated guidance composition.
//!
//! [`compose`] renders the text for a requested intent. A profile switches every
//! template to its personalized form, with sub-classification keyed off the
//! profile's degree and career goals instead of the message text. When the
//! requested intent has nothing to say (no track matched, or the personalized
//! branch has no template for it), the lower-priority intents the message also
//! matched are tried in order, then a fixed default. Composition is total and
//! never returns an empty string.

use crate::intent::{Intent, IntentSet, NormalizedMessage, classify};
use crate::profile::UserProfile;
use crate::templates;
use crate::tracks::{DegreeTrack, GoalTrack};

const GENERIC_CAREER: &str = "I can help you plan your career! Please tell me:\n\n\
1. Your educational background (Computer Science, Engineering, Business, etc.)\n\
2. Your current skills and experience\n\
3. What type of career interests you (AI/ML, Web Development, Data Science, etc.)\n\n\
This will help me provide a personalized career roadmap and skill recommendations.";

const GENERIC_QUALIFICATION: &str = "To provide the best career guidance, please share:\n\n\
• Your educational background\n\
• Current skills and experience\n\
• Career interests and goals\n\
• Preferred work environment\n\n\
I'll create a personalized roadmap with specific steps and skill recommendations.";

const GENERIC_HELP: &str = "I'm your AI career counselor! I can help you with:\n\n\
• Personalized career roadmaps\n\
• Skill development recommendations\n\
• Industry insights and trends\n\
• Learning path planning\n\
• Career transition guidance\n\n\
What would you like to know about your career development?";

const GENERIC_DEFAULT: &str = "I'm here to help you with your career planning! Please tell me about \
your educational background, current skills, and career goals. I'll provide personalized guidance, \
roadmaps, and skill recommendations to help you succeed in your chosen field.";

const GENERIC_GREETING: &str = "Hello! I'm your personalized education and career counselor. I can \
help you create a customized learning roadmap based on your qualifications, interests, and career \
goals. What's your educational background and what career path interests you?";

const GENERIC_QUESTIONS: [&str; 5] = [
    "I have a Computer Science degree, what's my career roadmap?",
    "I'm an Engineering graduate, help me with my learning path",
    "I have a Business background, how can I transition to tech?",
    "What skills should I learn for AI/ML careers?",
    "Help me create a personalized education plan",
];

/// Classify `message` and compose the response for its winning intent.
pub fn respond(message: &NormalizedMessage, profile: Option<&UserProfile>) -> String {
    let matched = classify(message);
    compose_matched(matched.primary(), matched, message, profile)
}

/// Compose guidance for `intent`.
///
/// Falls through to lower-priority intents matched by `message`, then to the
/// personalized or generic default.
pub fn compose(intent: Intent, message: &NormalizedMessage, profile: Option<&UserProfile>) -> String {
    compose_matched(intent, classify(message), message, profile)
}

fn compose_matched(
    intent: Intent,
    matched: IntentSet,
    message: &NormalizedMessage,
    profile: Option<&UserProfile>,
) -> String {
    let rendered = std::iter::once(intent)
        .chain(matched.below(intent))
        .find_map(|candidate| render(candidate, message, profile).map(|text| (candidate, text)));

    match rendered {
        Some((resolved, text)) => {
            tracing::debug!(
                requested = %intent,
                resolved = %resolved,
                personalized = profile.is_some(),
                "Composed guidance"
            );
            text
        }
        None => {
            tracing::debug!(
                requested = %intent,
                personalized = profile.is_some(),
                "No template matched, using default guidance"
            );
            default_guidance(profile)
        }
    }
}

/// Opening message of a chat session.
pub fn greeting(profile: Option<&UserProfile>) -> String {
    match profile {
        Some(p) => format!(
            "Hello {name}! I'm your personalized education and career counselor. I can see you \
             have a {degree} degree and want to become a {goals}. Let me help you create a \
             customized learning roadmap based on your background and goals. What specific \
             aspects of your career development would you like to discuss?",
            name = p.name,
            degree = p.degree,
            goals = p.career_goals,
        ),
        None => GENERIC_GREETING.to_string(),
    }
}

/// Five starter questions offered alongside the greeting.
pub fn suggested_questions(profile: Option<&UserProfile>) -> Vec<String> {
    match profile {
        Some(p) => vec![
            format!("Based on my {} degree, what's my career roadmap?", p.degree),
            format!(
                "I want to become a {}, what skills do I need?",
                p.career_goals
            ),
            format!(
                "Help me create a learning plan for my {} experience level",
                p.experience
            ),
            format!(
                "What certifications should I pursue for {}?",
                p.career_goals
            ),
            format!(
                "How can I leverage my {} background for better opportunities?",
                p.degree
            ),
        ],
        None => GENERIC_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    }
}

fn render(intent: Intent, message: &NormalizedMessage, profile: Option<&UserProfile>) -> Option<String> {
    match profile {
        Some(p) => render_personalized(intent, p),
        None => render_generic(intent, message),
    }
}

fn render_personalized(intent: Intent, p: &UserProfile) -> Option<String> {
    match intent {
        Intent::Roadmap => DegreeTrack::from_profile(p).map(|track| personalized_roadmap(track, p)),
        Intent::Skills => GoalTrack::from_profile(p).map(|track| personalized_skills(track, p)),
        Intent::Career => Some(personalized_career(p)),
        Intent::Qualification | Intent::Help | Intent::None => None,
    }
}

fn render_generic(intent: Intent, message: &NormalizedMessage) -> Option<String> {
    match intent {
        Intent::Roadmap => DegreeTrack::from_message(message).map(generic_roadmap),
        Intent::Skills => GoalTrack::from_message(message).map(generic_skills),
        Intent::Career => Some(GENERIC_CAREER.to_string()),
        Intent::Qualification => Some(GENERIC_QUALIFICATION.to_string()),
        Intent::Help => Some(GENERIC_HELP.to_string()),
        Intent::None => None,
    }
}

fn default_guidance(profile: Option<&UserProfile>) -> String {
    match profile {
        Some(p) => format!(
            "Hello {name}! 👋\n\n\
             I can see you have a {degree} degree with {experience} experience and want to become \
             a {goals}. Let me help you create a personalized career development plan!\n\n\
             What would you like to focus on:\n\
             • Detailed career roadmap for {goals}\n\
             • Specific skills you need to learn\n\
             • How to leverage your {degree} background\n\
             • Project ideas to build your portfolio\n\
             • Networking strategies for {goals}",
            name = p.name,
            degree = p.degree,
            experience = p.experience,
            goals = p.career_goals,
        ),
        None => GENERIC_DEFAULT.to_string(),
    }
}

fn personalized_roadmap(track: DegreeTrack, p: &UserProfile) -> String {
    let roadmap = templates::roadmap(track);
    let goals = &p.career_goals;
    let goals_lower = p.goals_lower();

    let intro = match track {
        DegreeTrack::ComputerScience => format!(
            "Based on your {} degree and goal to become a {goals}, here's your customized path:",
            p.degree
        ),
        DegreeTrack::Engineering => {
            format!("Leveraging your {} background to become a {goals}:", p.degree)
        }
        DegreeTrack::Business => format!(
            "Using your {} background to transition into {goals}:",
            p.degree
        ),
    };
    let next_steps = match track {
        DegreeTrack::ComputerScience => format!(
            "1. Focus on {goals_lower} specific skills\n\
             2. Build projects showcasing your {} experience\n\
             3. Network with professionals in {goals} field\n\
             4. Consider relevant certifications for {goals}",
            p.experience
        ),
        DegreeTrack::Engineering => format!(
            "1. Build on your engineering problem-solving skills\n\
             2. Develop {goals_lower} specific technical skills\n\
             3. Create projects that bridge engineering and {goals}\n\
             4. Network with engineering professionals in tech"
        ),
        DegreeTrack::Business => format!(
            "1. Leverage your business acumen for {goals} roles\n\
             2. Develop technical skills relevant to {goals}\n\
             3. Build digital projects showcasing business + tech skills\n\
             4. Network in tech industry with business perspective"
        ),
    };

    format!(
        "🎯 Personalized Career Roadmap for {name}:\n\n{intro}\n\n{steps}\n\n\
         💼 Recommended Career Paths for you:\n{careers}\n\n📈 Next Steps:\n{next_steps}",
        name = p.name,
        steps = roadmap.steps_block(),
        careers = roadmap.careers_line(),
    )
}

fn personalized_skills(track: GoalTrack, p: &UserProfile) -> String {
    let learning_path = match track {
        GoalTrack::AiMl => format!(
            "1. Start with Python (build on your {experience})\n\
             2. Learn ML fundamentals through online courses\n\
             3. Build AI projects using your {degree} background\n\
             4. Get certifications relevant to {goals}\n\
             5. Network with AI professionals",
            experience = p.experience,
            degree = p.degree,
            goals = p.career_goals,
        ),
        GoalTrack::WebDevelopment => format!(
            "1. Build on your {experience} with modern web technologies\n\
             2. Create portfolio projects showcasing your {degree} background\n\
             3. Learn full-stack development\n\
             4. Get relevant certifications\n\
             5. Build a strong online presence",
            experience = p.experience,
            degree = p.degree,
        ),
        GoalTrack::DataScience => format!(
            "1. Leverage your {degree} analytical thinking\n\
             2. Learn data analysis tools and techniques\n\
             3. Build data projects using your {experience}\n\
             4. Get data science certifications\n\
             5. Network with data professionals",
            experience = p.experience,
            degree = p.degree,
        ),
    };

    format!(
        "🎯 Personalized Skills for {name}:\n\n\
         Based on your {degree} degree and {experience} experience, here are the essential skills \
         for becoming a {goals}:\n\n{skills}\n\n📚 Learning Path for you:\n{learning_path}",
        name = p.name,
        degree = p.degree,
        experience = p.experience,
        goals = p.career_goals,
        skills = templates::skills(track).join("\n"),
    )
}

fn personalized_career(p: &UserProfile) -> String {
    format!(
        "🎯 Personalized Career Guidance for {name}:\n\n\
         Based on your profile:\n\
         • Degree: {degree}\n\
         • Experience: {experience}\n\
         • Career Goal: {goals}\n\n\
         💡 My Recommendations:\n\n\
         1. **Leverage Your Background**: Your {degree} degree provides a strong foundation for {goals}\n\n\
         2. **Skill Development**: Focus on {goals_lower} specific skills while building on your {experience}\n\n\
         3. **Project Portfolio**: Create projects that showcase your {degree} knowledge applied to {goals}\n\n\
         4. **Networking**: Connect with professionals who have similar backgrounds to yours\n\n\
         5. **Certifications**: Pursue certifications relevant to {goals} that complement your {degree}\n\n\
         Would you like me to create a detailed roadmap or focus on specific skills?",
        name = p.name,
        degree = p.degree,
        experience = p.experience,
        goals = p.career_goals,
        goals_lower = p.goals_lower(),
    )
}

fn generic_roadmap(track: DegreeTrack) -> String {
    let roadmap = templates::roadmap(track);
    format!(
        "{}:\n\n{}\n\nRecommended Career Paths:\n{}",
        roadmap.title,
        roadmap.steps_block(),
        roadmap.careers_line()
    )
}

fn generic_skills(track: GoalTrack) -> String {
    let (heading, closing) = match track {
        GoalTrack::AiMl => (
            "Essential Skills for AI/ML Careers",
            "Start with Python and gradually build your ML knowledge through projects and courses.",
        ),
        GoalTrack::WebDevelopment => (
            "Essential Skills for Web Development",
            "Focus on building real projects to showcase your skills.",
        ),
        GoalTrack::DataScience => (
            "Essential Skills for Data Science",
            "Start with Python and SQL, then move to advanced analytics.",
        ),
    };
    format!(
        "{heading}:\n\n{}\n\n{closing}",
        templates::skills(track).join("\n")
    )
}

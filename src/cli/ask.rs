//! `eduai ask` and `eduai recommend`

use eduai_guidance::UserProfile;

use crate::cli::ProfileArgs;
use crate::config::Config;
use crate::guidance::GuidanceService;
use crate::llm::create_text_generator;

pub async fn run_ask_command(
    message: &str,
    profile: ProfileArgs,
    templates_only: bool,
) -> anyhow::Result<()> {
    if message.is_empty() {
        anyhow::bail!("Message is required");
    }

    let service = if templates_only {
        GuidanceService::templated()
    } else {
        let config = Config::from_env()?;
        GuidanceService::new(create_text_generator(&config.llm)?)
    };

    let profile = profile.into_profile();
    let response = service.respond(message, profile.as_ref()).await;
    println!("{response}");
    Ok(())
}

pub fn run_recommend_command(degree: String, goals: String) -> anyhow::Result<()> {
    let profile = UserProfile {
        degree,
        career_goals: goals,
        ..UserProfile::default()
    };
    let dashboard = eduai_guidance::generate(&profile);
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}

use crate::domain::models::ConfigFile;
use crate::services::audit::audit;
use crate::services::config::config_file_path;
use crate::services::doctor::environment_doctor;
use std::path::Path;

pub fn handle_doctor_command(
    config: &ConfigFile,
    config_arg: Option<&Path>,
) -> anyhow::Result<()> {
    let config_path = config_file_path(config_arg)?;
    let report = environment_doctor(config, &config_path);
    audit("doctor", serde_json::json!({"overall": report.overall}));

    println!("overall: {}", report.overall);
    for c in &report.checks {
        println!("{}\t{}", c.name, c.status);
    }
    Ok(())
}

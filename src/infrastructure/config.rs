use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    pub server: ServerSettings,
    pub page: PageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    pub anchor_id: String,
    /// Host HTML file. The embedded default document is used when unset.
    #[serde(default)]
    pub host_document: Option<String>,
}

/// Load `config/dashboard.*` (optional) with `DASHBOARD__*` environment overrides.
pub fn load_dashboard_config() -> anyhow::Result<DashboardSettings> {
    build_settings(
        config::File::with_name("config/dashboard").required(false),
        config::Environment::with_prefix("DASHBOARD").separator("__"),
    )
}

fn build_settings<F, E>(file: F, env: E) -> anyhow::Result<DashboardSettings>
where
    F: config::Source + Send + Sync + 'static,
    E: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("page.anchor_id", "root")?
        .add_source(file)
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Environment, File, FileFormat};
    use std::collections::HashMap;

    fn no_env() -> Environment {
        Environment::with_prefix("DASHBOARD")
            .separator("__")
            .source(Some(HashMap::new()))
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = build_settings(File::from_str("", FileFormat::Toml), no_env()).unwrap();

        assert_eq!(settings.server.bind, "0.0.0.0:8080");
        assert_eq!(settings.page.anchor_id, "root");
        assert!(settings.page.host_document.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [server]
            bind = "127.0.0.1:3000"

            [page]
            anchor_id = "app"
            host_document = "static/index.html"
        "#;
        let settings = build_settings(File::from_str(toml, FileFormat::Toml), no_env()).unwrap();

        assert_eq!(settings.server.bind, "127.0.0.1:3000");
        assert_eq!(settings.page.anchor_id, "app");
        assert_eq!(settings.page.host_document.as_deref(), Some("static/index.html"));
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut vars = HashMap::new();
        vars.insert("DASHBOARD__PAGE__ANCHOR_ID".to_string(), "mount".to_string());
        let env = Environment::with_prefix("DASHBOARD")
            .separator("__")
            .source(Some(vars));

        let toml = "[page]\nanchor_id = \"app\"\n";
        let settings = build_settings(File::from_str(toml, FileFormat::Toml), env).unwrap();

        assert_eq!(settings.page.anchor_id, "mount");
    }
}

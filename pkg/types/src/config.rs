use serde::{Deserialize, Serialize};

/// Client configuration file (YAML), shared by `secretsctl` and the web UI
/// server.
///
/// Example `config.yaml`:
/// ```yaml
/// api-url: http://localhost:8000
/// token: my-secret-token
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfigFile {
    #[serde(default, alias = "api-url")]
    pub api_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_default() {
        let cfg: ClientConfigFile =
            load_config_file("/nonexistent/secrets-client/config.yaml").unwrap();
        assert_eq!(cfg, ClientConfigFile::default());
    }

    #[test]
    fn reads_kebab_case_keys() {
        let path = std::env::temp_dir().join(format!("secrets-cfg-{}.yaml", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "api-url: http://10.0.0.5:8000\ntoken: abc").unwrap();
        drop(f);

        let cfg: ClientConfigFile = load_config_file(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.api_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert_eq!(cfg.token.as_deref(), Some("abc"));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let path = std::env::temp_dir().join(format!("secrets-bad-{}.yaml", std::process::id()));
        std::fs::write(&path, "api-url: [unterminated").unwrap();
        let res: anyhow::Result<ClientConfigFile> = load_config_file(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(res.is_err());
    }
}

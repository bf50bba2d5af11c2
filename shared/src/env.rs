use std::str::FromStr;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// 実行環境を環境変数 ENV から判定する。未設定ならビルドプロファイルに従う。
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = "development";
    #[cfg(not(debug_assertions))]
    let default_env = "production";

    match std::env::var("ENV") {
        Err(_) => default_env.to_string(),
        Ok(v) => v,
    }
    .parse()
    .unwrap_or_default()
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            _ => Ok(Environment::Development),
        }
    }
}

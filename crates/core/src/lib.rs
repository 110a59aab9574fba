pub mod domain;
pub mod error;
pub mod pipeline;
pub mod portfolio;
pub mod risk;

pub mod config {
    use anyhow::Context;

    use crate::domain::allocation::Universe;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub universe: Universe,
        pub include_alternatives: bool,
        pub output_pretty: bool,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                universe: Universe::Global,
                include_alternatives: false,
                output_pretty: true,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let mut out = Self::default();

            if let Ok(s) = std::env::var("CARTERA_UNIVERSE") {
                out.universe = s
                    .parse()
                    .with_context(|| format!("invalid CARTERA_UNIVERSE: {s}"))?;
            }

            if let Ok(s) = std::env::var("CARTERA_INCLUDE_ALTERNATIVES") {
                out.include_alternatives = parse_flag(&s)
                    .with_context(|| format!("invalid CARTERA_INCLUDE_ALTERNATIVES: {s}"))?;
            }

            if let Ok(s) = std::env::var("CARTERA_OUTPUT_PRETTY") {
                out.output_pretty = parse_flag(&s)
                    .with_context(|| format!("invalid CARTERA_OUTPUT_PRETTY: {s}"))?;
            }

            Ok(out)
        }
    }

    pub fn parse_flag(raw: &str) -> anyhow::Result<bool> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            other => anyhow::bail!("expected a boolean flag, got {other:?}"),
        }
    }

}

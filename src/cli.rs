use crate::config::EditorUiConfigOverrides;
use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_FRAMES: u32 = 120;
const DEFAULT_DT_SECONDS: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliOverrides {
    config: Option<PathBuf>,
    frames: Option<u32>,
    dt: Option<Duration>,
    width: Option<u32>,
    height: Option<u32>,
}

impl CliOverrides {
    pub fn parse_from_env() -> Result<Self> {
        Self::parse(env::args())
    }

    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut overrides = CliOverrides::default();
        let mut iter = args.into_iter();
        let _ = iter.next(); // program name
        while let Some(raw_flag) = iter.next() {
            let flag = raw_flag.as_ref();
            let Some(key) = flag.strip_prefix("--") else {
                bail!("Unexpected argument '{flag}'. Use --config/--frames/--dt/--width/--height with values.");
            };
            let value =
                iter.next().ok_or_else(|| anyhow!("Expected a value after '{flag}'"))?.as_ref().to_string();
            match key {
                "config" => overrides.config = Some(PathBuf::from(value)),
                "frames" => {
                    overrides.frames =
                        Some(value.parse::<u32>().with_context(|| format!("Invalid frame count '{value}'"))?);
                }
                "dt" => {
                    let seconds = value.parse::<f32>().with_context(|| format!("Invalid dt '{value}'"))?;
                    let Ok(dt) = Duration::try_from_secs_f32(seconds) else {
                        bail!("dt must be a non-negative, representable number of seconds, got '{value}'");
                    };
                    overrides.dt = Some(dt);
                }
                "width" => {
                    overrides.width =
                        Some(value.parse::<u32>().with_context(|| format!("Invalid width '{value}'"))?);
                }
                "height" => {
                    overrides.height =
                        Some(value.parse::<u32>().with_context(|| format!("Invalid height '{value}'"))?);
                }
                _ => bail!("Unknown flag '{flag}'. Supported flags: --config, --frames, --dt, --width, --height."),
            }
        }
        Ok(overrides)
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    pub fn frames(&self) -> u32 {
        self.frames.unwrap_or(DEFAULT_FRAMES)
    }

    pub fn frame_delta(&self) -> Duration {
        self.dt.unwrap_or_else(|| Duration::from_secs_f32(DEFAULT_DT_SECONDS))
    }

    pub fn config_overrides(&self) -> EditorUiConfigOverrides {
        EditorUiConfigOverrides { width: self.width, height: self.height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = ["harness", "--config", "ui.json", "--frames", "30", "--dt", "0.5", "--width", "800", "--height", "600"];
        let overrides = CliOverrides::parse(args).expect("parse overrides");
        assert_eq!(overrides.config_path(), Some(&PathBuf::from("ui.json")));
        assert_eq!(overrides.frames(), 30);
        assert_eq!(overrides.frame_delta(), Duration::from_millis(500));
        let config = overrides.config_overrides();
        assert_eq!((config.width, config.height), (Some(800), Some(600)));
    }

    #[test]
    fn defaults_apply_without_flags() {
        let overrides = CliOverrides::parse(["harness"]).expect("parse overrides");
        assert_eq!(overrides.frames(), DEFAULT_FRAMES);
        assert!(overrides.config_path().is_none());
        assert!(overrides.config_overrides().is_empty());
    }

    #[test]
    fn latest_flag_wins() {
        let overrides = CliOverrides::parse(["harness", "--frames", "3", "--frames", "9"]).expect("parse overrides");
        assert_eq!(overrides.frames(), 9);
    }

    #[test]
    fn missing_value_errors() {
        let err = CliOverrides::parse(["harness", "--dt"]).unwrap_err();
        assert!(err.to_string().contains("Expected a value"));
    }

    #[test]
    fn rejects_negative_dt_and_unknown_flags() {
        assert!(CliOverrides::parse(["harness", "--dt", "-1"]).is_err());
        let err = CliOverrides::parse(["harness", "--vsync", "on"]).unwrap_err();
        assert!(err.to_string().contains("Unknown flag"));
    }

    #[test]
    fn rejects_dt_too_large_for_a_duration() {
        for value in ["1e30", "inf", "NaN"] {
            let err = CliOverrides::parse(["harness", "--dt", value]).unwrap_err();
            assert!(err.to_string().contains("representable"), "{value}: {err}");
        }
        let overrides = CliOverrides::parse(["harness", "--dt", "0"]).expect("zero dt");
        assert_eq!(overrides.frame_delta(), Duration::ZERO);
    }
}

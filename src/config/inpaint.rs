use crate::inpaint::{InpaintParams, PredictorChoice};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `gdfmm_inpaint` tool.
#[derive(Debug, Deserialize)]
pub struct InpaintToolConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub params: InpaintParams,
    #[serde(default)]
    pub predictor: PredictorChoice,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    /// Single-channel depth image (0 = unknown).
    pub depth: PathBuf,
    /// 3-channel color guide of the same size.
    pub color: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Base directory for relative output paths.
    #[serde(default)]
    pub dir: PathBuf,
    /// Filled 16-bit depth PNG.
    pub depth: PathBuf,
    /// Optional JSON run report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

impl OutputConfig {
    pub fn depth_path(&self) -> PathBuf {
        resolve_path(&self.dir, &self.depth)
    }

    pub fn report_path(&self) -> Option<PathBuf> {
        self.report_json
            .as_ref()
            .map(|path| resolve_path(&self.dir, path))
    }
}

pub fn load_config(path: &Path) -> Result<InpaintToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<InpaintToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

fn resolve_path(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inpaint::RegressionParams;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = parse_config(
            r#"{
                "input": { "depth": "d.png", "color": "c.png" },
                "output": { "depth": "filled.png" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.params, InpaintParams::default());
        assert_eq!(config.predictor, PredictorChoice::Bilateral);
        assert_eq!(config.output.depth_path(), PathBuf::from("filled.png"));
        assert_eq!(config.output.report_path(), None);
    }

    #[test]
    fn full_config_selects_regression() {
        let config = parse_config(
            r#"{
                "input": { "depth": "d.png", "color": "c.png" },
                "params": { "window_size": 9, "blur_sigma": 0.0 },
                "predictor": { "kind": "regression", "epsilon": 0.5, "constant": 2.0 },
                "output": { "dir": "out", "depth": "filled.png", "report_json": "report.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.params.window_size, 9);
        assert_eq!(
            config.predictor,
            PredictorChoice::Regression(RegressionParams {
                epsilon: 0.5,
                constant: 2.0,
                ..Default::default()
            })
        );
        assert_eq!(
            config.output.report_path(),
            Some(PathBuf::from("out").join("report.json"))
        );
    }
}

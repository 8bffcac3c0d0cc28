//! 负责加载工具层的配置。
//!
//! 配置由调用方加载一次后显式传给各个函数，这里不保存任何全局状态。

use std::{
    fs,
    path::{Path, PathBuf},
};

use fandash_core::{DashError, DashboardConfig, Result, ScTierPalette};
use tracing::info;

use crate::sc_tier::default_palette;

const CONFIG_DIR_NAME: &str = "fandash";
const CONFIG_FILE_NAME: &str = "config.json";

/// 获取应用配置目录下配置文件的完整路径。
#[cfg(feature = "dirs")]
pub fn get_config_file_path() -> Result<PathBuf> {
    let mut config_dir = dirs::config_dir().ok_or(DashError::ConfigDirUnavailable)?;
    config_dir.push(CONFIG_DIR_NAME);
    config_dir.push(CONFIG_FILE_NAME);
    Ok(config_dir)
}

#[cfg(not(feature = "dirs"))]
pub fn get_config_file_path() -> Result<PathBuf> {
    Err(DashError::ConfigDirUnavailable)
}

/// 从用户配置目录加载配置，文件不存在时使用默认配置。
pub fn load_dashboard_config() -> Result<DashboardConfig> {
    let config_path = get_config_file_path()?;
    if !config_path.exists() {
        info!("未找到配置文件 {}，使用默认配置。", config_path.display());
        return Ok(DashboardConfig::default());
    }
    load_dashboard_config_from(&config_path)
}

/// 从指定文件加载配置。`.toml` 文件按 TOML 解析，其余按 JSON 解析。
pub fn load_dashboard_config_from(path: &Path) -> Result<DashboardConfig> {
    let content = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let config: DashboardConfig = if is_toml {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)
            .map_err(|e| DashError::json_parse(e, path.display().to_string()))?
    };
    validate(&config, path)?;
    info!("已加载配置 {}。", path.display());
    Ok(config)
}

fn validate(config: &DashboardConfig, path: &Path) -> Result<()> {
    if let Some(palette) = &config.sc_palette {
        let has_blank = [&palette.low, &palette.medium, &palette.high]
            .iter()
            .flat_map(|c| [&c.background_color, &c.text_color, &c.border_color])
            .any(|color| color.trim().is_empty());
        if has_blank {
            return Err(DashError::InvalidConfig {
                path: path.to_path_buf(),
                reason: "SC 配色不能为空".to_string(),
            });
        }
    }
    Ok(())
}

/// 配置里的 SC 配色，未配置时回退到内置配色。
#[must_use]
pub fn effective_palette(config: &DashboardConfig) -> &ScTierPalette {
    config.sc_palette.as_ref().unwrap_or_else(|| default_palette())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fandash_core::LrcParseMode;
    use tempfile::TempDir;

    /// 目录随返回的 `TempDir` 一起删除，调用方需要持有它直到读完文件。
    fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_temp_config_is_removed_after_use() {
        let (dir, path) = write_temp("config.json", "{}");
        assert_eq!(
            load_dashboard_config_from(&path).unwrap(),
            DashboardConfig::default()
        );
        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn test_load_json_config() {
        let (_dir, path) = write_temp(
            "config.json",
            r#"{"snippet":{"maxSnippets":4},"lrc":{"mode":"tolerateUntimed"}}"#,
        );
        let config = load_dashboard_config_from(&path).unwrap();
        assert_eq!(config.snippet.max_snippets, 4);
        assert_eq!(config.lrc.mode, LrcParseMode::TolerateUntimed);
        assert!(config.sc_palette.is_none());
        assert_eq!(effective_palette(&config), default_palette());
    }

    #[test]
    fn test_load_toml_config_with_palette() {
        let (_dir, path) = write_temp(
            "config.toml",
            r##"
[snippet]
maxSnippets = 3

[scPalette.low]
backgroundColor = "#000"
textColor = "#111"
borderColor = "#222"

[scPalette.medium]
backgroundColor = "#333"
textColor = "#444"
borderColor = "#555"

[scPalette.high]
backgroundColor = "#666"
textColor = "#777"
borderColor = "#888"
"##,
        );
        let config = load_dashboard_config_from(&path).unwrap();
        assert_eq!(config.snippet.max_snippets, 3);
        assert_eq!(config.lrc.mode, LrcParseMode::Strict);
        assert_eq!(effective_palette(&config).high.text_color, "#777");
    }

    #[test]
    fn test_blank_color_is_rejected() {
        let (_dir, path) = write_temp(
            "blank.json",
            r##"{"scPalette":{
                "low":{"backgroundColor":"","textColor":"#1","borderColor":"#2"},
                "medium":{"backgroundColor":"#3","textColor":"#4","borderColor":"#5"},
                "high":{"backgroundColor":"#6","textColor":"#7","borderColor":"#8"}}}"##,
        );
        let err = load_dashboard_config_from(&path).unwrap_err();
        assert!(matches!(err, DashError::InvalidConfig { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_dashboard_config_from(Path::new("/nonexistent/fandash.json")).unwrap_err();
        assert!(matches!(err, DashError::Io(_)));
    }

    #[test]
    fn test_empty_json_object_is_default() {
        let (_dir, path) = write_temp("empty.json", "{}");
        assert_eq!(
            load_dashboard_config_from(&path).unwrap(),
            DashboardConfig::default()
        );
    }
}

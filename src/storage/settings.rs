//! # 应用设置
//!
//! 唯一的可识别选项是 `history_limit`（撤销/重做各自的快照上限），
//! 持久化到 runtime.json 的 `"settings"` 字段。
//!
//! 读取失败永远不上抛：文件缺失、JSON 损坏、字段类型不对，
//! 一律静默回落默认值；成功解析但越界的值夹入合法区间。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::paths;

pub const DEFAULT_HISTORY_LIMIT: i64 = 50;
pub const MIN_HISTORY_LIMIT: i64 = 1;
pub const MAX_HISTORY_LIMIT: i64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 撤销与重做栈各自保留的快照数量
    pub history_limit: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Settings {
    /// 从 runtime.json 加载，任何读取/解析失败都回落默认值。
    pub fn load() -> Self {
        let mut settings: Settings = load_field("settings")
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default();
        settings.history_limit = clamp_history_limit(settings.history_limit);
        settings
    }

    /// 保存到 runtime.json 的 `"settings"` 字段。
    pub fn save(&self) {
        if let Ok(v) = serde_json::to_value(self) {
            if let Err(e) = merge_field("settings", v) {
                eprintln!("[storage] 设置保存失败: {e}");
            }
        }
    }
}

/// 把配置值夹入 [1, 1000]。
pub fn clamp_history_limit(raw: i64) -> i64 {
    raw.clamp(MIN_HISTORY_LIMIT, MAX_HISTORY_LIMIT)
}

// ── runtime.json 读写 ───────────────────────────────────────

/// 读取 runtime.json 的完整内容，文件不存在 / 解析失败返回空对象。
fn load_root() -> Value {
    match std::fs::read_to_string(paths::runtime_json_path()) {
        Ok(content) => serde_json::from_str(&content).unwrap_or(Value::Object(Default::default())),
        Err(_) => Value::Object(Default::default()),
    }
}

fn load_field(key: &str) -> Option<Value> {
    load_root().get(key).cloned()
}

/// 读取 → 插入/替换 key → 写回（格式化）。
fn merge_field(key: &str, value: Value) -> Result<(), std::io::Error> {
    let mut root = load_root();
    if let Some(obj) = root.as_object_mut() {
        obj.insert(key.to_string(), value);
    }
    let content = serde_json::to_string_pretty(&root).unwrap_or_default();
    std::fs::write(paths::runtime_json_path(), content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_history_limit() {
        assert_eq!(clamp_history_limit(50), 50);
        assert_eq!(clamp_history_limit(1), 1);
        assert_eq!(clamp_history_limit(1000), 1000);
        assert_eq!(clamp_history_limit(0), 1);
        assert_eq!(clamp_history_limit(-7), 1);
        assert_eq!(clamp_history_limit(99999), 1000);
    }

    #[test]
    fn test_malformed_settings_fall_back_to_default() {
        // 字段类型不对 → 整体回落默认
        let v: Result<Settings, _> = serde_json::from_value(serde_json::json!({
            "history_limit": "many"
        }));
        assert!(v.is_err());

        // 字段缺失 → serde(default)
        let v: Settings = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(v.history_limit, DEFAULT_HISTORY_LIMIT);
    }
}

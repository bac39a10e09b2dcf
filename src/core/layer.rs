/// 当前编辑/显示的图层。
///
/// 笔刷落在哪个字段、渲染展示哪种视图，都由这一个枚举决定，
/// 地形与海拔不再各走一套代码路径。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLayer {
    /// 基础地形层：每格一个地形色（陆地/海水）
    BaseTerrain,
    /// 海拔层：每格一个 0..=255 高度值，仅陆地有效
    Elevation,
}

impl Default for ActiveLayer {
    fn default() -> Self {
        Self::BaseTerrain
    }
}

impl ActiveLayer {
    pub fn label(self) -> &'static str {
        match self {
            Self::BaseTerrain => "基础地形",
            Self::Elevation => "海拔",
        }
    }
}

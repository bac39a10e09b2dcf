//! # PNG 栅格交换
//!
//! 交换格式是一张 24 位 RGB 栅格（不带 alpha），导入导出共用。
//! 导入时任何可解码的图像都转为 RGB8、逐像素视作不透明；
//! 导出只写地形层——海拔永远不进交换格式。

use std::path::Path;

use crate::core::color::ColorRgb;

/// 解码结果：声明尺寸 + 行主序像素。
#[derive(Debug, Clone)]
pub struct DecodedRaster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<ColorRgb>,
}

/// 从 PNG（或任何 image 认识的格式）解码出 RGB 栅格。
pub fn import_png(path: &Path) -> Result<DecodedRaster, String> {
    let img = image::open(path).map_err(|e| format!("读取图像失败: {e}"))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| ColorRgb::from(p.0)).collect();

    Ok(DecodedRaster {
        width,
        height,
        pixels,
    })
}

/// 将地形层像素写为 PNG 文件。
pub fn export_png(
    width: u32,
    height: u32,
    pixels: &[ColorRgb],
    path: &Path,
) -> Result<(), String> {
    let mut buf: Vec<u8> = Vec::with_capacity(pixels.len() * 3);
    for c in pixels {
        buf.extend_from_slice(&c.as_array());
    }

    let img = image::RgbImage::from_raw(width, height, buf)
        .ok_or_else(|| "创建图像缓冲区失败".to_string())?;
    img.save(path).map_err(|e| format!("保存 PNG 失败: {e}"))?;

    Ok(())
}

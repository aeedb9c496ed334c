//! Image assets: symbol faces and the window icon.
//!
//! Everything is decoded up front, before a window exists, so a missing or
//! corrupt file stops the cabinet at startup with the offending path.

use slot_core::{AssetConfig, Result, SlotError, Symbol};
use std::path::Path;

/// Decoded RGBA pixels of one image
#[derive(Debug, Clone)]
pub struct RgbaPixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// One decoded face per symbol
#[derive(Debug, Clone)]
pub struct SymbolImages {
    faces: Vec<(Symbol, RgbaPixels)>,
}

impl SymbolImages {
    pub fn get(&self, symbol: Symbol) -> Option<&RgbaPixels> {
        self.faces
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, pixels)| pixels)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &RgbaPixels)> {
        self.faces.iter().map(|(s, pixels)| (*s, pixels))
    }
}

/// Decode an image file into RGBA pixels
pub fn decode(path: &Path) -> Result<RgbaPixels> {
    let image = image::open(path).map_err(|e| {
        SlotError::AssetError(format!("Failed to load image '{}': {}", path.display(), e))
    })?;
    let rgba = image.to_rgba8();
    Ok(RgbaPixels {
        width: rgba.width(),
        height: rgba.height(),
        data: rgba.into_raw(),
    })
}

/// Decode the face of every symbol
pub fn load_symbol_images(assets: &AssetConfig) -> Result<SymbolImages> {
    let mut faces = Vec::with_capacity(Symbol::ALL.len());
    for symbol in Symbol::ALL {
        let pixels = decode(&assets.symbol_image(symbol))?;
        log::debug!("Loaded {} ({}x{})", symbol.name(), pixels.width, pixels.height);
        faces.push((symbol, pixels));
    }
    Ok(SymbolImages { faces })
}

/// Decode the window icon
pub fn load_icon(assets: &AssetConfig) -> Result<winit::window::Icon> {
    let path = assets.path(&assets.window_icon);
    let pixels = decode(&path)?;
    winit::window::Icon::from_rgba(pixels.data, pixels.width, pixels.height).map_err(|e| {
        SlotError::AssetError(format!("Bad window icon '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_assets(name: &str) -> AssetConfig {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::create_dir_all(&dir);
        AssetConfig {
            root: dir,
            ..AssetConfig::default()
        }
    }

    #[test]
    fn missing_face_names_the_file() {
        let assets = temp_assets("slot_assets_missing");
        let err = load_symbol_images(&assets).unwrap_err();
        assert!(matches!(err, SlotError::AssetError(_)));
        assert!(err.to_string().contains("seven.png"));
    }

    #[test]
    fn loads_every_face() {
        let assets = temp_assets("slot_assets_ok");
        for symbol in Symbol::ALL {
            let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255]));
            img.save(assets.symbol_image(symbol)).unwrap();
        }

        let faces = load_symbol_images(&assets).unwrap();
        let seven = faces.get(Symbol::Seven).unwrap();
        assert_eq!((seven.width, seven.height), (4, 2));
        assert_eq!(seven.data.len(), 4 * 2 * 4);
        assert_eq!(faces.iter().count(), 3);

        for symbol in Symbol::ALL {
            let _ = std::fs::remove_file(assets.symbol_image(symbol));
        }
    }

    #[test]
    fn corrupt_file_is_rejected() {
        let assets = temp_assets("slot_assets_corrupt");
        let path = assets.path(&assets.window_icon);
        std::fs::write(&path, b"not a png").unwrap();
        assert!(load_icon(&assets).is_err());
        let _ = std::fs::remove_file(&path);
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::path::Path;

use anyhow::{Context, Result};
use image::GenericImageView;

/// A decoded logo, already flattened to raw RGB8 for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Logo {
    pub fn from_image(image: &image::DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.to_rgb8().into_raw(),
        }
    }
}

/// Both page-header logos. Loading is an explicit two-stage join: both files
/// are decoded before any drawing can start, and either failure aborts the
/// whole generation attempt through a single error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logos {
    pub primary: Logo,
    pub secondary: Logo,
}

impl Logos {
    pub fn load(primary: &Path, secondary: &Path) -> Result<Self> {
        let primary_image = image::open(primary)
            .with_context(|| format!("load primary logo {}", primary.display()))?;
        let secondary_image = image::open(secondary)
            .with_context(|| format!("load secondary logo {}", secondary.display()))?;
        Ok(Self {
            primary: Logo::from_image(&primary_image),
            secondary: Logo::from_image(&secondary_image),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Logos;
    use anyhow::Result;
    use std::path::PathBuf;

    fn write_png(dir: &std::path::Path, name: &str) -> Result<PathBuf> {
        let path = dir.join(name);
        let pixels = image::RgbImage::from_pixel(8, 4, image::Rgb([20, 40, 60]));
        pixels.save(&path)?;
        Ok(path)
    }

    #[test]
    fn loads_both_logos() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let primary = write_png(temp.path(), "logo.png")?;
        let secondary = write_png(temp.path(), "logo2.png")?;

        let logos = Logos::load(&primary, &secondary)?;
        assert_eq!(logos.primary.width, 8);
        assert_eq!(logos.primary.height, 4);
        assert_eq!(logos.primary.pixels.len(), 8 * 4 * 3);
        Ok(())
    }

    #[test]
    fn missing_primary_logo_is_named_in_the_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let secondary = write_png(temp.path(), "logo2.png")?;

        let error = Logos::load(&temp.path().join("missing.png"), &secondary)
            .expect_err("missing file should fail");
        assert!(error.to_string().contains("primary logo"));
        Ok(())
    }

    #[test]
    fn missing_secondary_logo_is_named_in_the_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let primary = write_png(temp.path(), "logo.png")?;

        let error = Logos::load(&primary, &temp.path().join("missing.png"))
            .expect_err("missing file should fail");
        assert!(error.to_string().contains("secondary logo"));
        Ok(())
    }
}

//! `SoftwareCanvas`: a CPU implementation of [`TileCanvas`].
//!
//! Textures are RGBA8 pixel arrays. Copies use nearest-neighbor scaling,
//! multiply each channel by the source texture's color mod, and alpha-blend
//! onto the target. The visible front buffer is only updated by `present`.

use super::canvas::{PixelRect, TextureId, TileCanvas};
use crate::color::ColorSpec;
use crate::error::{RenderError, Result};
use crate::glyph::GlyphSheet;

type Rgba = [u8; 4];

#[derive(Clone, Default)]
struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    color_mod: Option<ColorSpec>,
}

impl Texture {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; width as usize * height as usize],
            color_mod: None,
        }
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        (x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height))
            .then(|| y as usize * self.width as usize + x as usize)
    }

    fn full_rect(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width, self.height)
    }

    fn fill(&mut self, rect: PixelRect, color: Rgba) {
        let x0 = rect.x.max(0) as i64;
        let y0 = rect.y.max(0) as i64;
        let x1 = rect.right().min(i64::from(self.width));
        let y1 = rect.bottom().min(i64::from(self.height));
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(i) = self.index(x, y) {
                    self.pixels[i] = color;
                }
            }
        }
    }
}

/// Scaled, tinted, alpha-blended copy of `src_rect` of `src` into `dst_rect` of `dst`.
fn blit(src: &Texture, src_rect: PixelRect, dst: &mut Texture, dst_rect: PixelRect) {
    if src_rect.w == 0 || src_rect.h == 0 || dst_rect.w == 0 || dst_rect.h == 0 {
        return;
    }
    let tint = src.color_mod.unwrap_or(ColorSpec::WHITE);

    let y0 = i64::from(dst_rect.y).max(0);
    let y1 = dst_rect.bottom().min(i64::from(dst.height));
    let x0 = i64::from(dst_rect.x).max(0);
    let x1 = dst_rect.right().min(i64::from(dst.width));

    for dy in y0..y1 {
        let sy = i64::from(src_rect.y) + (dy - i64::from(dst_rect.y)) * i64::from(src_rect.h) / i64::from(dst_rect.h);
        for dx in x0..x1 {
            let sx = i64::from(src_rect.x) + (dx - i64::from(dst_rect.x)) * i64::from(src_rect.w) / i64::from(dst_rect.w);
            let (Some(si), Some(di)) = (src.index(sx, sy), dst.index(dx, dy)) else {
                continue;
            };
            let [r, g, b, a] = src.pixels[si];
            if a == 0 {
                continue;
            }
            let tinted = [modulate(r, tint.r), modulate(g, tint.g), modulate(b, tint.b), a];
            dst.pixels[di] = blend(tinted, dst.pixels[di]);
        }
    }
}

#[inline]
const fn modulate(channel: u8, tint: u8) -> u8 {
    ((channel as u16 * tint as u16 + 127) / 255) as u8
}

/// Source-over blend.
#[inline]
fn blend(src: Rgba, dst: Rgba) -> Rgba {
    let a = u32::from(src[3]);
    if a == 255 {
        return src;
    }
    let inv = 255 - a;
    let mix = |s: u8, d: u8| ((u32::from(s) * a + u32::from(d) * inv + 127) / 255) as u8;
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (a + (u32::from(dst[3]) * inv + 127) / 255) as u8,
    ]
}

/// CPU pixel canvas with an off-screen back buffer and a visible front buffer.
pub struct SoftwareCanvas {
    /// Back buffer of the visible output.
    screen: Texture,
    /// Pixels last presented.
    front: Vec<Rgba>,
    textures: Vec<Texture>,
    target: Option<TextureId>,
    draw_color: Rgba,
    presents: u64,
}

impl SoftwareCanvas {
    /// Canvas with a `width` x `height` visible output, initially black.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::Config(format!("canvas size {width}x{height} has no pixels")));
        }
        let mut screen = Texture::new(width, height);
        screen.fill(screen.full_rect(), [0, 0, 0, 255]);
        let front = screen.pixels.clone();
        Ok(Self {
            screen,
            front,
            textures: Vec::new(),
            target: None,
            draw_color: [0, 0, 0, 255],
            presents: 0,
        })
    }

    /// Visible pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorSpec> {
        let i = self.screen.index(i64::from(x), i64::from(y))?;
        let [r, g, b, _] = self.front[i];
        Some(ColorSpec::new(r, g, b))
    }

    /// Pixel at (x, y) of a texture, regardless of what is visible.
    pub fn texture_pixel(&self, texture: TextureId, x: u32, y: u32) -> Option<ColorSpec> {
        let tex = self.textures.get(texture.0)?;
        let [r, g, b, _] = tex.pixels[tex.index(i64::from(x), i64::from(y))?];
        Some(ColorSpec::new(r, g, b))
    }

    /// Current render target.
    pub const fn target(&self) -> Option<TextureId> {
        self.target
    }

    /// Number of frames presented.
    pub const fn present_count(&self) -> u64 {
        self.presents
    }

    fn texture(&self, texture: TextureId) -> Result<&Texture> {
        self.textures.get(texture.0).ok_or(RenderError::UnknownTexture(texture.0))
    }

    fn texture_mut(&mut self, texture: TextureId) -> Result<&mut Texture> {
        self.textures.get_mut(texture.0).ok_or(RenderError::UnknownTexture(texture.0))
    }

    fn target_mut(&mut self) -> Result<&mut Texture> {
        match self.target {
            None => Ok(&mut self.screen),
            Some(id) => self.texture_mut(id),
        }
    }

    fn push(&mut self, texture: Texture) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() - 1)
    }
}

impl TileCanvas for SoftwareCanvas {
    fn output_size(&self) -> (u32, u32) {
        (self.screen.width, self.screen.height)
    }

    fn upload_sheet(&mut self, sheet: &GlyphSheet) -> Result<TextureId> {
        let pixels = sheet
            .pixels()
            .chunks_exact(4)
            .map(|p| [p[0], p[1], p[2], p[3]])
            .collect();
        Ok(self.push(Texture {
            width: sheet.width(),
            height: sheet.height(),
            pixels,
            color_mod: None,
        }))
    }

    fn create_target(&mut self, width: u32, height: u32) -> Result<TextureId> {
        if width == 0 || height == 0 {
            return Err(RenderError::Config(format!("target size {width}x{height} has no pixels")));
        }
        Ok(self.push(Texture::new(width, height)))
    }

    fn texture_size(&self, texture: TextureId) -> Result<(u32, u32)> {
        self.texture(texture).map(|t| (t.width, t.height))
    }

    fn set_target(&mut self, target: Option<TextureId>) -> Result<()> {
        if let Some(id) = target {
            self.texture(id)?;
        }
        self.target = target;
        Ok(())
    }

    fn set_draw_color(&mut self, color: ColorSpec) {
        self.draw_color = [color.r, color.g, color.b, 255];
    }

    fn clear(&mut self) -> Result<()> {
        let color = self.draw_color;
        let target = self.target_mut()?;
        target.pixels.fill(color);
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect) -> Result<()> {
        let color = self.draw_color;
        self.target_mut()?.fill(rect, color);
        Ok(())
    }

    fn set_color_mod(&mut self, texture: TextureId, color: ColorSpec) -> Result<()> {
        self.texture_mut(texture)?.color_mod = Some(color);
        Ok(())
    }

    fn copy(&mut self, texture: TextureId, src: Option<PixelRect>, dst: Option<PixelRect>) -> Result<()> {
        let source = self.texture(texture)?;
        let src_rect = src.unwrap_or_else(|| source.full_rect());

        match self.target {
            None => {
                let dst_rect = dst.unwrap_or_else(|| self.screen.full_rect());
                let source = self.textures.get(texture.0).ok_or(RenderError::UnknownTexture(texture.0))?;
                blit(source, src_rect, &mut self.screen, dst_rect);
            }
            Some(target) if target == texture => {
                let source = source.clone();
                let dst_rect = dst.unwrap_or_else(|| source.full_rect());
                blit(&source, src_rect, self.texture_mut(target)?, dst_rect);
            }
            Some(target) => {
                let mut dest = std::mem::take(self.texture_mut(target)?);
                let dst_rect = dst.unwrap_or_else(|| dest.full_rect());
                blit(&self.textures[texture.0], src_rect, &mut dest, dst_rect);
                self.textures[target.0] = dest;
            }
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.front.copy_from_slice(&self.screen.pixels);
        self.presents += 1;
        log::trace!("canvas present #{}", self.presents);
        Ok(())
    }
}

impl std::fmt::Debug for SoftwareCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoftwareCanvas")
            .field("width", &self.screen.width)
            .field("height", &self.screen.height)
            .field("textures", &self.textures.len())
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

use crate::coords::Viewport;

/// Everything a shape renderer needs per pass: device handles, the surface
/// format its pipeline must target, and the logical viewport it maps draw
/// coordinates into.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport, // logical px
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            viewport,
        }
    }

    /// Viewport extent as uploaded to the shaders' viewport uniform.
    #[inline]
    pub fn ubo_extent(&self) -> [f32; 2] {
        ubo_extent(self.viewport)
    }
}

/// Clamps a viewport to at least 1x1 so the NDC division in the vertex
/// shaders never sees a zero extent while the window is minimized.
#[inline]
fn ubo_extent(viewport: Viewport) -> [f32; 2] {
    [viewport.width.max(1.0), viewport.height.max(1.0)]
}

/// Where a pass records and draws: the frame's encoder plus the swapchain
/// color view.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ubo_extent_passes_real_sizes_through() {
        assert_eq!(ubo_extent(Viewport::new(800.0, 600.0)), [800.0, 600.0]);
    }

    #[test]
    fn ubo_extent_clamps_zero_viewport() {
        assert_eq!(ubo_extent(Viewport::new(0.0, 0.0)), [1.0, 1.0]);
        assert_eq!(ubo_extent(Viewport::new(800.0, 0.0)), [800.0, 1.0]);
    }
}

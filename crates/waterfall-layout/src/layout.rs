//! Public entry point of the waterfall layout.

use waterfall_geometry::{Rect, Size};

use crate::attributes::{ElementKind, IndexPath, LayoutAttributes};
use crate::axis::Axis;
use crate::config::{LayoutConfig, RenderDirection, SectionConfig};
use crate::delegate::WaterfallLayoutDelegate;
use crate::error::LayoutError;
use crate::host::LayoutHost;
use crate::model::LayoutModel;
use crate::pinning::PinningResolver;
use crate::placement::PlacementEngine;
use crate::viewport::ViewportHandler;

/// Multi-column waterfall layout.
///
/// The host calls [`prepare`](Self::prepare) whenever its content, width or
/// configuration changes, then queries geometry as it scrolls. Pinning of
/// section headers and footers is reapplied on every query, so scrolling
/// never needs a full pass unless [`should_recompute`](Self::should_recompute)
/// says the width changed.
///
/// A layout is driven from the host's layout thread; callers serialize all
/// access to one instance.
#[derive(Debug, Clone, Default)]
pub struct WaterfallLayout {
    config: LayoutConfig,
    scroll_direction: Axis,
    model: Option<LayoutModel>,
}

impl WaterfallLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            scroll_direction: Axis::Vertical,
            model: None,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Edits the configuration and drops the current snapshot.
    pub fn update_config(&mut self, update: impl FnOnce(&mut LayoutConfig)) {
        update(&mut self.config);
        self.invalidate();
    }

    pub fn set_header_offset(&mut self, header_offset: f32) {
        self.update_config(|config| config.header_offset = header_offset);
    }

    pub fn set_footer_offset(&mut self, footer_offset: f32) {
        self.update_config(|config| config.footer_offset = footer_offset);
    }

    pub fn set_render_direction(&mut self, render_direction: RenderDirection) {
        self.update_config(|config| config.render_direction = render_direction);
    }

    pub fn scroll_direction(&self) -> Axis {
        self.scroll_direction
    }

    /// Only [`Axis::Vertical`] is supported; anything else is rejected and
    /// leaves the layout untouched.
    pub fn set_scroll_direction(&mut self, axis: Axis) -> Result<(), LayoutError> {
        if !axis.is_vertical() {
            return Err(LayoutError::UnsupportedScrollDirection(axis));
        }
        self.scroll_direction = axis;
        Ok(())
    }

    /// Drops the current snapshot; queries fail until the next `prepare`.
    pub fn invalidate(&mut self) {
        self.model = None;
    }

    pub fn is_prepared(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Option<&LayoutModel> {
        self.model.as_ref()
    }

    /// Runs a full layout pass, replacing any previous snapshot.
    pub fn prepare<H, D>(&mut self, host: &H, delegate: &D) -> Result<&LayoutModel, LayoutError>
    where
        H: LayoutHost + ?Sized,
        D: WaterfallLayoutDelegate + ?Sized,
    {
        let viewport = ViewportHandler::new(host, self.config.section_inset_reference)?;
        let model = PlacementEngine::new(&self.config, host, delegate)
            .place(viewport.bounds(), viewport.content_width());
        log::debug!(
            "WaterfallLayout: prepared {} sections, {} elements in {} buckets, bottom {}",
            model.section_count(),
            model.attributes().len(),
            model.union_index().buckets().len(),
            model.final_bottom()
        );
        Ok(&*self.model.insert(model))
    }

    pub fn content_size(&self) -> Result<Size, LayoutError> {
        let model = self.model.as_ref().ok_or(LayoutError::NotPrepared)?;
        let height = if model.section_count() == 0 {
            (self.config.header_offset + self.config.footer_offset).min(model.bounds().height)
        } else {
            model.final_bottom() + self.config.footer_offset
        };
        Ok(Size::new(model.content_width(), height))
    }

    /// Cell attributes at `index_path`, or `None` when out of range or not
    /// prepared.
    pub fn attributes_for_item(&self, index_path: IndexPath) -> Option<LayoutAttributes> {
        self.model
            .as_ref()?
            .item_attributes(index_path.section)?
            .get(index_path.item)
            .copied()
    }

    /// Header or footer attributes of `index_path.section`, pinned to the
    /// host's current viewport when pinning is enabled for that kind.
    pub fn attributes_for_supplementary<H>(
        &mut self,
        kind: ElementKind,
        index_path: IndexPath,
        host: &H,
    ) -> Result<Option<LayoutAttributes>, LayoutError>
    where
        H: LayoutHost + ?Sized,
    {
        let viewport = ViewportHandler::new(host, self.config.section_inset_reference)?;
        let model = self.model.as_mut().ok_or(LayoutError::NotPrepared)?;
        let resolver = PinningResolver::new(viewport.visible_bounds());
        match kind {
            ElementKind::SectionHeader if self.config.section_headers_pin_to_visible_bounds => {
                resolver.pin_headers(model)
            }
            ElementKind::SectionFooter if self.config.section_footers_pin_to_visible_bounds => {
                resolver.pin_footers(model)
            }
            _ => {}
        }
        Ok(model.supplementary(kind, index_path.section).copied())
    }

    /// Every element whose frame intersects `rect`, in emission order.
    ///
    /// Pinned headers and footers are first moved to the host's current
    /// viewport, so the result reflects where they are drawn.
    pub fn attributes_in_rect<H>(
        &mut self,
        rect: Rect,
        host: &H,
    ) -> Result<Vec<LayoutAttributes>, LayoutError>
    where
        H: LayoutHost + ?Sized,
    {
        let viewport = ViewportHandler::new(host, self.config.section_inset_reference)?;
        let model = self.model.as_mut().ok_or(LayoutError::NotPrepared)?;
        if self.config.has_pinning() {
            let resolver = PinningResolver::new(viewport.visible_bounds());
            if self.config.section_headers_pin_to_visible_bounds {
                resolver.pin_headers(model);
            }
            if self.config.section_footers_pin_to_visible_bounds {
                resolver.pin_footers(model);
            }
        }
        Ok(model.attributes_in_rect(&rect))
    }

    /// Whether a bounds change needs another `prepare`.
    ///
    /// Pinned frames depend on the scroll position and column widths depend
    /// on the bounds width; a pure scroll without pinning needs nothing.
    pub fn should_recompute(&self, new_bounds: Rect) -> bool {
        if self.config.has_pinning() {
            return true;
        }
        self.model
            .as_ref()
            .map_or(true, |model| model.bounds().width != new_bounds.width)
    }

    /// Column width of `section` for the host's current width.
    ///
    /// Lets a delegate size items to the column they will be placed in.
    pub fn item_width<H, D>(
        &self,
        section: usize,
        host: &H,
        delegate: &D,
    ) -> Result<f32, LayoutError>
    where
        H: LayoutHost + ?Sized,
        D: WaterfallLayoutDelegate + ?Sized,
    {
        let viewport = ViewportHandler::new(host, self.config.section_inset_reference)?;
        let settings = SectionConfig::resolve(&self.config, delegate, section);
        Ok(settings.item_width(viewport.content_width()))
    }

    /// The rect pinned headers and footers are clamped against.
    pub fn visible_bounds<H>(&self, host: &H) -> Result<Rect, LayoutError>
    where
        H: LayoutHost + ?Sized,
    {
        ViewportHandler::new(host, self.config.section_inset_reference)
            .map(|viewport| viewport.visible_bounds())
    }

    pub fn content_width<H>(&self, host: &H) -> Result<f32, LayoutError>
    where
        H: LayoutHost + ?Sized,
    {
        ViewportHandler::new(host, self.config.section_inset_reference)
            .map(|viewport| viewport.content_width())
    }
}

use std::collections::HashSet;

use crate::coords::CoordSpace;
use crate::layers::{MasterControls, preset_layers, presets};
use crate::paint::{ColorPalette, GradientDef, resolve_gradient};
use crate::scene::{DrawList, LayerCmd};
use crate::shape::{ShapeParams, synthesize_path};

use super::ComposeError;

/// What to do when shapes and gradients do not line up.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ReferencePolicy {
    /// Log a warning and keep going: unknown references paint unfilled and the
    /// first definition of a duplicated id wins.
    #[default]
    Lenient,
    /// Fail the whole composition on the first violation.
    Strict,
}

/// Builds draw lists from shape and gradient definitions.
///
/// Stateless apart from its settings; every call returns a fresh list, so one
/// composer can be shared freely across threads.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Composer {
    space: CoordSpace,
    policy: ReferencePolicy,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_space(mut self, space: CoordSpace) -> Self {
        debug_assert!(space.is_valid(), "Composer::with_space: invalid space {space:?}");
        self.space = space;
        self
    }

    pub fn with_policy(mut self, policy: ReferencePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn space(&self) -> CoordSpace {
        self.space
    }

    #[inline]
    pub fn policy(&self) -> ReferencePolicy {
        self.policy
    }

    /// Composes the built-in layers scaled by `masters` with the built-in gradients.
    pub fn compose_preset(&self, palette: &ColorPalette, masters: MasterControls) -> Result<DrawList, ComposeError> {
        self.compose(palette, &preset_layers(masters), &presets::base_gradients())
    }

    /// Composes an explicit layer and gradient set.
    ///
    /// `shapes[0]` is the bottom-most layer. Each gradient is resolved once,
    /// however many layers reference it.
    pub fn compose(
        &self,
        palette: &ColorPalette,
        shapes: &[ShapeParams],
        gradients: &[GradientDef],
    ) -> Result<DrawList, ComposeError> {
        let mut list = DrawList::new(self.space);
        let mut declared = HashSet::with_capacity(gradients.len());

        for def in gradients {
            if !declared.insert(def.id.as_str()) {
                self.violation(ComposeError::DuplicateGradient { id: def.id.clone() })?;
                continue;
            }
            let resolved = resolve_gradient(def, palette, self.space);
            if !resolved.is_finite() {
                log::warn!("gradient {:?} has non-finite geometry or stops", def.id);
            }
            list.push_gradient(resolved);
        }

        for (index, shape) in shapes.iter().enumerate() {
            if !shape.is_valid() {
                log::debug!("layer {index} is outside nominal ranges: {shape:?}");
            }

            let fill = if declared.contains(shape.gradient_ref.as_str()) {
                Some(shape.gradient_ref.clone())
            } else {
                self.violation(ComposeError::UnknownGradient { layer: index, id: shape.gradient_ref.clone() })?;
                None
            };

            let path = synthesize_path(shape, self.space);
            list.push_layer(LayerCmd::new(index, path, fill, shape.blur_radius()));
        }

        log::debug!(
            "composed {} layers with {} gradients in {}x{} space",
            list.layers().len(),
            list.gradients().len(),
            self.space.width,
            self.space.height
        );

        Ok(list)
    }

    fn violation(&self, err: ComposeError) -> Result<(), ComposeError> {
        match self.policy {
            ReferencePolicy::Strict => Err(err),
            ReferencePolicy::Lenient => {
                log::warn!("{err}; continuing");
                Ok(())
            }
        }
    }
}

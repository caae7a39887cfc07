// Pure style-string construction for the card layer, kept free of DOM types
// so it can be tested on the host.

use crate::constants::{CARD_HOVER_SCALE, CARD_LIFT_PX, CARD_PERSPECTIVE_PX};
use folio_core::tilt::CardTilt;

/// CSS transform for a card in its current tilt state. The rest pose keeps
/// the perspective term so leaving a card does not snap its 3D context.
pub fn card_transform(tilt: &CardTilt) -> String {
    if tilt.hovered {
        format!(
            "perspective({CARD_PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-{CARD_LIFT_PX}px) scale({CARD_HOVER_SCALE})",
            tilt.rotate_x, tilt.rotate_y
        )
    } else {
        format!("perspective({CARD_PERSPECTIVE_PX}px) rotateX(0deg) rotateY(0deg)")
    }
}

/// CSS class list for a card with the given accent.
pub fn accent_class(accent: folio_core::Accent) -> &'static str {
    match accent {
        folio_core::Accent::Cyan => "project-card accent-cyan",
        folio_core::Accent::Magenta => "project-card accent-magenta",
        folio_core::Accent::Purple => "project-card accent-purple",
    }
}

/// Glow strength for a card; fully driven by the hover flag.
pub fn glow_opacity(tilt: &CardTilt) -> f32 {
    if tilt.hovered {
        1.0
    } else {
        0.0
    }
}

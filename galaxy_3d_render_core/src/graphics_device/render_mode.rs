/// Render modes and the fixed-function state each one implies.
///
/// A batch tags itself with a `RenderMode`; before committing it, the
/// accumulator asks the device to switch to that mode's standard states,
/// unless the mode is `Any`.

use bitflags::bitflags;

/// Render mode requested by a batch
///
/// Ordered by declaration, which `sort::by_render_mode` relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderMode {
    /// Keep whatever state the device is in (no state change)
    Any,
    /// Depth-tested, depth-written, no blending
    Opaque,
    /// Opaque with alpha test (cut-outs, decals)
    Decal,
    /// Alpha blended, depth-tested, no depth write
    Transparent,
    /// Additive blending, no depth write
    Additive,
    /// Depth pre-pass: depth only, no colour
    DepthOnly,
    /// Screen-space quad: no depth, no culling
    Fullscreen,
    /// Object id pass, opaque states
    Pickable,
    /// Refraction / heat haze, blended over the scene
    Distortion,
}

bitflags! {
    /// Device state switches covered by `set_standard_states`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StateFlags: u32 {
        const DEPTH_TEST  = 1 << 0;
        const DEPTH_WRITE = 1 << 1;
        const BLEND       = 1 << 2;
        const ALPHA_TEST  = 1 << 3;
        const CULL_BACK   = 1 << 4;
        const COLOR_WRITE = 1 << 5;
    }
}

/// Blend equation used when `StateFlags::BLEND` is set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Blending disabled
    None,
    /// src * srcAlpha + dst * (1 - srcAlpha)
    Alpha,
    /// src + dst
    Additive,
}

/// Standard device state for a render mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardStates {
    pub flags: StateFlags,
    pub blend: BlendMode,
    /// Alpha test reference (0-255), meaningful with `StateFlags::ALPHA_TEST`
    pub alpha_ref: u8,
}

impl RenderMode {
    /// Every mode except `Any`
    pub const ALL_CONCRETE: [RenderMode; 8] = [
        RenderMode::Opaque,
        RenderMode::Decal,
        RenderMode::Transparent,
        RenderMode::Additive,
        RenderMode::DepthOnly,
        RenderMode::Fullscreen,
        RenderMode::Pickable,
        RenderMode::Distortion,
    ];

    /// `true` for the "no state change" sentinel
    pub fn is_any(self) -> bool {
        self == RenderMode::Any
    }

    /// State table for this mode. `None` for `Any`.
    pub fn standard_states(self) -> Option<StandardStates> {
        let opaque = StateFlags::DEPTH_TEST
            | StateFlags::DEPTH_WRITE
            | StateFlags::CULL_BACK
            | StateFlags::COLOR_WRITE;
        let blended = StateFlags::DEPTH_TEST | StateFlags::BLEND | StateFlags::CULL_BACK | StateFlags::COLOR_WRITE;

        let states = match self {
            RenderMode::Any => return None,
            RenderMode::Opaque | RenderMode::Pickable => StandardStates {
                flags: opaque,
                blend: BlendMode::None,
                alpha_ref: 0,
            },
            RenderMode::Decal => StandardStates {
                flags: opaque | StateFlags::ALPHA_TEST,
                blend: BlendMode::None,
                alpha_ref: 127,
            },
            RenderMode::Transparent | RenderMode::Distortion => StandardStates {
                flags: blended,
                blend: BlendMode::Alpha,
                alpha_ref: 0,
            },
            RenderMode::Additive => StandardStates {
                flags: blended,
                blend: BlendMode::Additive,
                alpha_ref: 0,
            },
            RenderMode::DepthOnly => StandardStates {
                flags: StateFlags::DEPTH_TEST | StateFlags::DEPTH_WRITE | StateFlags::CULL_BACK,
                blend: BlendMode::None,
                alpha_ref: 0,
            },
            RenderMode::Fullscreen => StandardStates {
                flags: StateFlags::COLOR_WRITE,
                blend: BlendMode::None,
                alpha_ref: 0,
            },
        };
        Some(states)
    }
}

#[cfg(test)]
#[path = "render_mode_tests.rs"]
mod tests;

// =========================================================
// Event timeline
// =========================================================

// The timeline is a plain list of `KeyDate`s; no dedicated payload type.

/// Route path for the merged event timeline
pub const GET_EVENTS: &str = "/events";

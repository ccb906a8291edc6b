/// Identifier for a blade in a [`crate::scene::Scene`].
///
/// Ids are handed out in creation order and never reused until the
/// scene is reset, so they double as the blade's draw order.
pub type BladeId = usize;

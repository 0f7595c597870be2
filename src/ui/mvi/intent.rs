/// Marker trait for intents.
///
/// An intent is a request for a state transition — a user action or a
/// system event. Intents carry whatever payload the reducer needs, so the
/// reducer itself stays a closed function over its two inputs.
pub trait Intent {}

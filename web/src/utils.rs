/// Seed drawn from JavaScript's `Math.random`.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}

/// Milliseconds since the epoch, from the browser clock.
pub(crate) fn js_now_ms() -> f64 {
    js_sys::Date::now()
}

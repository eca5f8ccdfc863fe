fn main() {
    // Node addon linking is only needed for the N-API build
    if std::env::var_os("CARGO_FEATURE_NODE").is_some() {
        napi_build::setup();
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use routegen::model::HandlerDescriptor;
use routegen::{GeneratorConfig, generate};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz model decoding
        if let Ok(handler) = serde_json::from_str::<HandlerDescriptor>(s) {
            // If the model decodes, generation must either succeed or report errors, never panic
            let _ = generate(&handler, &GeneratorConfig::default());
        }
    }
});

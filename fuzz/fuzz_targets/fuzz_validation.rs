#![no_main]

use libfuzzer_sys::fuzz_target;

use bmicalc_core::{evaluate, RawForm, Sex, MAX_AGE, MIN_AGE};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Split into weight|height|age|sex fields
    let mut parts = text.splitn(4, '|');
    let weight = parts.next().unwrap_or_default();
    let height = parts.next().unwrap_or_default();
    let age = parts.next().unwrap_or_default();
    let sex = parts.next().and_then(|s| s.parse::<Sex>().ok());

    // Should not panic; anything accepted must be in range
    if let Ok(input) = RawForm::new(weight, height, age, sex).validate() {
        assert!(input.weight_kg > 0.0 && input.weight_kg.is_finite());
        assert!(input.height_m > 0.0 && input.height_m.is_finite());
        assert!((MIN_AGE..=MAX_AGE).contains(&input.age_years));
        let _ = evaluate(&input);
    }
});

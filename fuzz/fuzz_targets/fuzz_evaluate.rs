#![no_main]

use libfuzzer_sys::fuzz_target;

use bmicalc_core::{evaluate, BmiInput, Sex};

fuzz_target!(|data: &[u8]| {
    if data.len() < 17 {
        return;
    }
    let weight = f64::from_le_bytes(data[0..8].try_into().unwrap());
    let height = f64::from_le_bytes(data[8..16].try_into().unwrap());
    let age = u32::from(data[16]);
    let sex = if data.len() > 17 && data[17] & 1 == 1 {
        Sex::Female
    } else {
        Sex::Male
    };

    let Ok(input) = BmiInput::new(weight, height, age, sex) else {
        return;
    };
    let result = evaluate(&input);
    // Classification must agree with the thresholds used
    assert_eq!(result.classification, result.thresholds.classify(result.bmi));
    assert_eq!(result, evaluate(&input));
});

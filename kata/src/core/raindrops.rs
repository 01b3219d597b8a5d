//! Raindrop sounds for a number's factors.

const DROPS: [(u64, &str); 3] = [(3, "Pling"), (5, "Plang"), (7, "Plong")];

pub fn convert(number: u64) -> String {
    let sounds: String = DROPS
        .iter()
        .filter(|(factor, _)| number % factor == 0)
        .map(|(_, sound)| *sound)
        .collect();
    if sounds.is_empty() {
        number.to_string()
    } else {
        sounds
    }
}

use city_hash::{BuildCityHasher, CityHashMap, CityHasher};
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

// A map with a fixed, unseeded hasher
type FixedCityHashMap<K, V> = HashMap<K, V, BuildHasherDefault<CityHasher>>;

fn main() {
    let mut scores: FixedCityHashMap<String, u32> = FixedCityHashMap::default();

    // Insert some data
    scores.insert("Alice".to_string(), 100);
    scores.insert("Bob".to_string(), 87);
    scores.insert("Charlie".to_string(), 95);
    scores.insert("David".to_string(), 78);

    println!("Scores:");
    for (name, score) in &scores {
        println!("  {}: {}", name, score);
    }

    if let Some(score) = scores.get("Alice") {
        println!("\nAlice's score: {}", score);
    }

    // A per-process random seed keeps key placement unpredictable
    let mut seeded: CityHashMap<String, u32> = CityHashMap::with_hasher(BuildCityHasher::random());
    seeded.extend(scores.drain());
    seeded.entry("Eve".to_string()).or_insert(92);
    println!("\nAfter adding Eve: {} students", seeded.len());
}

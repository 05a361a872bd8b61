//! Test utilities and fixtures for HURDAT2 parser testing
//!
//! This module provides sample HURDAT2 text shared by the parser test modules.


/// Two well-formed storm blocks in HURDAT2 layout
pub fn create_sample_hurdat() -> String {
    r#"AL011851,            UNNAMED,      3,
18510625, 0000,  , HU, 28.0N,  94.8W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
18510625, 0600,  , HU, 28.0N,  95.4W,  80, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
18510625, 1200,  , TS, 28.0N,  96.0W,  70, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,
AL092004,               IVAN,      3,
20040916, 0000,  , HU, 29.4N,  88.0W, 105,  939,  180,  150,  100,  150,   90,   75,   50,   75,   45,   30,   20,   30,
20040916, 0650, L, HU, 30.2N,  87.9W, 105,  946,  180,  150,  100,  150,   90,   75,   50,   75,   45,   30,   20,   30,
20040916, 1200,  , TS, 31.4N,  87.7W,  65,  964,  150,  150,   90,   90,    0,    0,    0,    0,    0,    0,    0,    0,
"#
    .to_string()
}

/// A single header followed by a single observation
pub fn create_minimal_hurdat() -> String {
    "AL122005,            KATRINA,      1,\n\
     20050829, 1110, L, HU, 29.3N,  89.6W, 110,  920,\n"
        .to_string()
}

//! Tables 5.3A and 5.3B of Orden DSA/934/2023 (BOE-A-2023-17875), which
//! amends RD 888/2022: binaural hearing deficiency → percentage of total
//! person disability.

use super::resolve_piecewise;

/// Table 5.3A — perceptive (sensorineural) and mixed hearing losses.
const TABLE_5_3A: [(f64, f64); 41] = [
    (0.0, 0.0),
    (1.6, 1.0),
    (3.2, 2.0),
    (4.8, 3.0),
    (6.4, 4.0),
    (8.0, 5.0),
    (9.6, 6.0),
    (11.2, 7.0),
    (12.8, 8.0),
    (14.4, 9.0),
    (16.0, 10.0),
    (17.6, 11.0),
    (19.2, 12.0),
    (20.8, 13.0),
    (22.4, 14.0),
    (23.9, 15.0),
    (25.4, 16.0),
    (26.9, 17.0),
    (28.4, 18.0),
    (29.9, 19.0),
    (32.5, 20.0),
    (35.0, 21.0),
    (37.5, 22.0),
    (40.0, 23.0),
    (42.5, 24.0),
    (45.0, 25.0),
    (47.5, 26.0),
    (50.0, 27.0),
    (52.5, 28.0),
    (54.9, 29.0),
    (59.5, 30.0),
    (64.0, 31.0),
    (68.5, 32.0),
    (73.0, 33.0),
    (77.5, 34.0),
    (81.9, 35.0),
    (85.6, 36.0),
    (89.2, 37.0),
    (92.8, 38.0),
    (96.4, 39.0),
    (100.0, 40.0),
];

/// Table 5.3B — exclusively conductive hearing losses (both ears).
const TABLE_5_3B: [(f64, f64); 36] = [
    (1.4, 0.0),
    (4.2, 1.0),
    (7.1, 2.0),
    (9.9, 3.0),
    (12.8, 4.0),
    (15.7, 5.0),
    (18.5, 6.0),
    (21.4, 7.0),
    (24.2, 8.0),
    (27.1, 9.0),
    (29.9, 10.0),
    (32.8, 11.0),
    (35.7, 12.0),
    (38.5, 13.0),
    (41.4, 14.0),
    (44.2, 15.0),
    (47.1, 16.0),
    (49.9, 17.0),
    (52.8, 18.0),
    (55.7, 19.0),
    (58.5, 20.0),
    (61.4, 21.0),
    (64.2, 22.0),
    (67.1, 23.0),
    (69.9, 24.0),
    (72.8, 25.0),
    (75.7, 26.0),
    (78.5, 27.0),
    (81.4, 28.0),
    (84.2, 29.0),
    (87.1, 30.0),
    (89.9, 31.0),
    (92.8, 32.0),
    (95.7, 33.0),
    (98.5, 34.0),
    (100.0, 35.0),
];

/// Disability percentage for a binaural deficiency. `exclusively_conductive`
/// selects table 5.3B; everything else resolves through 5.3A.
pub fn percentage(binaural_deficiency: f64, exclusively_conductive: bool) -> f64 {
    if exclusively_conductive {
        resolve_piecewise(&TABLE_5_3B, binaural_deficiency)
    } else {
        resolve_piecewise(&TABLE_5_3A, binaural_deficiency)
    }
}

// Centerline velocity profile synthesis
//
// These are analytic placeholder curves, NOT extracted from the solver's
// fields. Proper extraction would sample U along the vertical centerline with
// OpenFOAM's postProcess utility; until that is wired up, we approximate the
// cavity profile shape so the figure layout and naming can be exercised
// end to end.

use std::f64::consts::PI;

/// Number of sample points along the vertical centerline.
pub const PROFILE_POINTS: usize = 50;

/// Synthesized centerline profile: y coordinates with matching U and V
/// velocity samples.
#[derive(Debug, Clone)]
pub struct CenterlineProfile {
    pub y: Vec<f64>,
    pub u: Vec<f64>,
    pub v: Vec<f64>,
}

/// Build the placeholder centerline profiles for a given Reynolds number.
///
/// Low-Re cavity flow keeps a fixed-amplitude sine shape; above Re = 100 the
/// amplitude saturates toward 1 with an exponential envelope, mimicking the
/// thinning boundary layer.
pub fn centerline_profile(reynolds: u32) -> CenterlineProfile {
    let amplitude = if reynolds <= 100 {
        0.8
    } else {
        1.0 - (-(reynolds as f64) / 1000.0).exp()
    };

    let mut y = Vec::with_capacity(PROFILE_POINTS);
    let mut u = Vec::with_capacity(PROFILE_POINTS);

    for i in 0..PROFILE_POINTS {
        let yi = i as f64 / (PROFILE_POINTS - 1) as f64;
        y.push(yi);
        u.push((PI * yi).sin() * amplitude);
    }

    // V is identically zero in this approximation
    let v = vec![0.0; PROFILE_POINTS];

    CenterlineProfile { y, u, v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_has_fifty_points_spanning_unit_interval() {
        let profile = centerline_profile(100);
        assert_eq!(profile.y.len(), PROFILE_POINTS);
        assert_eq!(profile.u.len(), PROFILE_POINTS);
        assert_eq!(profile.v.len(), PROFILE_POINTS);
        assert_eq!(profile.y[0], 0.0);
        assert!((profile.y[PROFILE_POINTS - 1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_low_reynolds_uses_fixed_amplitude() {
        let profile = centerline_profile(100);
        let peak = profile.u.iter().cloned().fold(0.0f64, f64::max);
        // sin(pi * 0.5) * 0.8 at the midpoint
        assert!((peak - 0.8).abs() < 1e-3, "peak = {}", peak);
    }

    #[test]
    fn test_high_reynolds_uses_saturation_envelope() {
        let profile = centerline_profile(1000);
        let peak = profile.u.iter().cloned().fold(0.0f64, f64::max);
        let expected = 1.0 - (-1.0f64).exp();
        assert!((peak - expected).abs() < 1e-3, "peak = {}", peak);
    }

    #[test]
    fn test_v_profile_is_zero() {
        let profile = centerline_profile(400);
        assert!(profile.v.iter().all(|&v| v == 0.0));
    }
}

use std::ops::{Add, Mul, Sub};

/// Keyframe of a piecewise interpolant: the value `output` is produced at `input`.
#[derive(Clone, Copy, Debug)]
pub struct InterpolationKeyframe<V> {
    pub input: f32,
    pub output: V,
}

/// Piecewise-linear interpolation between keyframes on the domain [0, 1].
/// Queries outside the domain are clamped to the first / last keyframe.
#[derive(Clone, Debug)]
pub struct KeyframeInterpolator<V> {
    queries: Vec<f32>,
    values: Vec<V>,
}

/// Checks that keyframe inputs start at 0.0, end at 1.0 and strictly increase.
pub fn validate_keyframe_inputs(inputs: &[f32]) -> Result<(), String> {
    match (inputs.first(), inputs.last()) {
        (Some(first), Some(last)) => {
            if *first != 0.0 {
                return Err(format!("first keyframe query must be 0.0, got {}", first));
            }
            if *last != 1.0 {
                return Err(format!("last keyframe query must be 1.0, got {}", last));
            }
        }
        _ => return Err("keyframes must not be empty".to_owned()),
    }
    if inputs.len() < 2 {
        return Err("at least two keyframes are required".to_owned());
    }
    if let Some(pair) = inputs.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(format!(
            "keyframe queries must be strictly increasing: {} >= {}",
            pair[0], pair[1]
        ));
    }
    Ok(())
}

impl<V> KeyframeInterpolator<V>
where
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<f32, Output = V>,
{
    /// Panics if the keyframes fail `validate_keyframe_inputs`; callers
    /// validate user data before getting here.
    pub fn new(keyframes: &[InterpolationKeyframe<V>]) -> Self {
        let queries: Vec<f32> = keyframes.iter().map(|k| k.input).collect();
        if let Err(message) = validate_keyframe_inputs(&queries) {
            panic!("{}", message);
        }
        let values = keyframes.iter().map(|k| k.output).collect();
        Self { queries, values }
    }

    pub fn evaluate(&self, query: f32) -> V {
        let last = self.values.len() - 1;
        if query.is_nan() || query <= 0.0 {
            self.values[0]
        } else if query >= 1.0 {
            self.values[last]
        } else {
            let idx_upp = self.queries.partition_point(|q| query >= *q);
            let idx_low = idx_upp - 1;
            let val_low = self.queries[idx_low];
            let alpha = (query - val_low) / (self.queries[idx_upp] - val_low);
            let (a, b) = (self.values[idx_low], self.values[idx_upp]);
            a + (b - a) * alpha
        }
    }
}

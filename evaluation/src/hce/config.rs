/// Number of slots in the flat parameter vector.
pub const NUM_PARAMS: usize = 21;

/// Slot names in vector order. The order matches the layout the tuner
/// flattens parameters into, so vectors round-trip between the two.
const PARAM_NAMES: [&str; NUM_PARAMS] = [
    "material_pawn",
    "material_knight",
    "material_bishop",
    "material_rook",
    "material_queen",
    "material_king",
    "castle_rights_bonus",
    "castled_position_bonus",
    "isolated_pawn_penalty",
    "doubled_pawn_penalty",
    "backward_pawn_penalty",
    "connected_passed_pawn_bonus",
    "protected_passed_pawn_bonus",
    "passed_pawn_base_0",
    "passed_pawn_base_1",
    "passed_pawn_base_2",
    "passed_pawn_base_3",
    "passed_pawn_base_4",
    "passed_pawn_base_5",
    "passed_pawn_base_6",
    "passed_pawn_base_7",
];

#[derive(thiserror::Error, Debug)]
pub enum ParamError {
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),
    #[error("invalid value '{value}' for parameter '{name}'")]
    InvalidValue { name: String, value: String },
    #[error("parameter vector has {found} entries, expected {expected}")]
    VectorLength { expected: usize, found: usize },
}

/// Tunable evaluation weights. Values are never range-checked; a tuner may
/// push them anywhere and evaluation still produces a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalParams {
    /// Indexed like `Piece::ALL`, pawn through king.
    pub material_value: [f64; 6],

    // Castling
    pub castle_rights_bonus: f64,
    pub castled_position_bonus: f64,

    // Pawn weaknesses
    pub isolated_pawn_penalty: f64,
    pub doubled_pawn_penalty: f64,
    pub backward_pawn_penalty: f64,

    // Passed pawns
    /// Indexed by ranks advanced from the pawn's own back rank (0) to promotion (7).
    pub passed_pawn_base_value: [f64; 8],
    pub connected_passed_pawn_bonus: f64, // adjacent-file friend, 6th rank or beyond
    pub protected_passed_pawn_bonus: f64, // defended from behind, 6th rank or beyond
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            material_value: [100.0, 320.0, 330.0, 500.0, 900.0, 0.0],

            castle_rights_bonus: 30.0,
            castled_position_bonus: 75.0,

            isolated_pawn_penalty: 25.0,
            doubled_pawn_penalty: 20.0,
            backward_pawn_penalty: 15.0,

            passed_pawn_base_value: [0.0, 10.0, 20.0, 40.0, 80.0, 150.0, 250.0, 0.0],
            connected_passed_pawn_bonus: 15.0,
            protected_passed_pawn_bonus: 10.0,
        }
    }
}

impl EvalParams {
    pub fn names() -> &'static [&'static str; NUM_PARAMS] {
        &PARAM_NAMES
    }

    pub fn to_vector(&self) -> [f64; NUM_PARAMS] {
        let mut vector = [0.0; NUM_PARAMS];
        for (idx, value) in vector.iter_mut().enumerate() {
            *value = self.slot(idx);
        }
        vector
    }

    pub fn from_vector(vector: &[f64]) -> Result<Self, ParamError> {
        if vector.len() != NUM_PARAMS {
            return Err(ParamError::VectorLength {
                expected: NUM_PARAMS,
                found: vector.len(),
            });
        }

        let mut params = Self::default();
        for (idx, value) in vector.iter().enumerate() {
            *params.slot_mut(idx) = *value;
        }
        Ok(params)
    }

    pub fn get(&self, name: &str) -> Result<f64, ParamError> {
        let idx = slot_index(name)?;
        Ok(self.slot(idx))
    }

    /// Overrides a single parameter by name, leaving every other field alone.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), ParamError> {
        let idx = slot_index(name)?;
        let parsed = value
            .trim()
            .parse::<f64>()
            .map_err(|_| ParamError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
            })?;
        *self.slot_mut(idx) = parsed;
        Ok(())
    }

    fn slot(&self, idx: usize) -> f64 {
        match idx {
            0..=5 => self.material_value[idx],
            6 => self.castle_rights_bonus,
            7 => self.castled_position_bonus,
            8 => self.isolated_pawn_penalty,
            9 => self.doubled_pawn_penalty,
            10 => self.backward_pawn_penalty,
            11 => self.connected_passed_pawn_bonus,
            12 => self.protected_passed_pawn_bonus,
            13..=20 => self.passed_pawn_base_value[idx - 13],
            _ => unreachable!("parameter slot {} out of range", idx),
        }
    }

    fn slot_mut(&mut self, idx: usize) -> &mut f64 {
        match idx {
            0..=5 => &mut self.material_value[idx],
            6 => &mut self.castle_rights_bonus,
            7 => &mut self.castled_position_bonus,
            8 => &mut self.isolated_pawn_penalty,
            9 => &mut self.doubled_pawn_penalty,
            10 => &mut self.backward_pawn_penalty,
            11 => &mut self.connected_passed_pawn_bonus,
            12 => &mut self.protected_passed_pawn_bonus,
            13..=20 => &mut self.passed_pawn_base_value[idx - 13],
            _ => unreachable!("parameter slot {} out of range", idx),
        }
    }
}

fn slot_index(name: &str) -> Result<usize, ParamError> {
    PARAM_NAMES
        .iter()
        .position(|candidate| *candidate == name)
        .ok_or_else(|| ParamError::UnknownParameter(name.to_string()))
}

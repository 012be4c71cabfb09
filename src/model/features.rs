pub const N_FEATURES: usize = 5;

/// Form field names in the order the model expects them.
pub const FEATURE_NAMES: [&str; N_FEATURES] = ["income", "age", "rooms", "bedrooms", "population"];

/// Single prediction request.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Features {
    pub income: f64,
    pub age: f64,
    pub rooms: f64,
    pub bedrooms: f64,
    pub population: f64,
}

impl Features {
    #[must_use]
    pub const fn to_array(&self) -> [f64; N_FEATURES] {
        [self.income, self.age, self.rooms, self.bedrooms, self.population]
    }
}

impl From<[f64; N_FEATURES]> for Features {
    fn from([income, age, rooms, bedrooms, population]: [f64; N_FEATURES]) -> Self {
        Self {
            income,
            age,
            rooms,
            bedrooms,
            population,
        }
    }
}

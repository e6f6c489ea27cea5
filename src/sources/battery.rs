/// A battery bank dispatched against a fixed plant demand.
///
/// The battery absorbs any production surplus and covers any shortfall, each
/// capped by its rated charge/discharge power. Dispatch is a pure function of
/// the other sources' output; no state of charge is tracked.
///
/// # Sign Convention
/// - Negative output: charging (surplus being stored)
/// - Positive output: discharging (shortfall being covered)
#[derive(Debug, Clone)]
pub struct BatteryBank {
    /// Fixed plant demand in kilowatts.
    pub demand_kw: u32,

    /// Maximum charging power in kilowatts (positive magnitude).
    pub max_charge_kw: u32,

    /// Maximum discharging power in kilowatts (positive magnitude).
    pub max_discharge_kw: u32,
}

impl BatteryBank {
    /// Creates a new battery bank with the specified dispatch limits.
    pub fn new(demand_kw: u32, max_charge_kw: u32, max_discharge_kw: u32) -> Self {
        Self {
            demand_kw,
            max_charge_kw,
            max_discharge_kw,
        }
    }

    /// Returns the battery power in kilowatts given the other sources'
    /// output.
    ///
    /// Surplus (`solar + wind > demand`) charges the battery and yields a
    /// negative value capped at `-max_charge_kw`. Shortfall discharges it
    /// and yields a positive value capped at `max_discharge_kw`. Exact
    /// balance yields zero.
    pub fn output_kw(&self, solar_kw: u32, wind_kw: u32) -> i32 {
        let production = solar_kw + wind_kw;
        if production > self.demand_kw {
            let surplus = production - self.demand_kw;
            -(surplus.min(self.max_charge_kw) as i32)
        } else {
            let shortfall = self.demand_kw - production;
            shortfall.min(self.max_discharge_kw) as i32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> BatteryBank {
        BatteryBank::new(120, 50, 40)
    }

    #[test]
    fn new_battery_bank() {
        let b = bank();
        assert_eq!(b.demand_kw, 120);
        assert_eq!(b.max_charge_kw, 50);
        assert_eq!(b.max_discharge_kw, 40);
    }

    #[test]
    fn surplus_charges() {
        // 100 + 50 = 150 > 120, surplus 30 → charging at -30
        assert_eq!(bank().output_kw(100, 50), -30);
    }

    #[test]
    fn charge_capped_at_rated_power() {
        // surplus 180 caps at 50
        assert_eq!(bank().output_kw(200, 100), -50);
    }

    #[test]
    fn shortfall_discharges() {
        // 40 + 50 = 90 < 120, shortfall 30 → discharging at +30
        assert_eq!(bank().output_kw(40, 50), 30);
    }

    #[test]
    fn discharge_capped_at_rated_power() {
        // shortfall 120 caps at 40
        assert_eq!(bank().output_kw(0, 0), 40);
    }

    #[test]
    fn exact_balance_is_idle() {
        assert_eq!(bank().output_kw(70, 50), 0);
    }

    #[test]
    fn one_kw_either_side_of_balance() {
        assert_eq!(bank().output_kw(71, 50), -1);
        assert_eq!(bank().output_kw(69, 50), 1);
    }

    #[test]
    fn output_always_within_caps() {
        let b = bank();
        for solar in (0..=200).step_by(10) {
            for wind in (0..=120).step_by(10) {
                let kw = b.output_kw(solar, wind);
                assert!((-50..=40).contains(&kw));
            }
        }
    }
}

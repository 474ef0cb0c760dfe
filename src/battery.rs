//! Stationary battery model: charge state, cycle counting, and cumulative
//! arbitrage revenue.

/// A battery pack built from identical modules.
///
/// Holds the physical and financial state of one simulation run: state
/// of charge, completed charge/discharge cycles, and signed cumulative
/// revenue. The pack is mutated exactly once per simulated hour through
/// [`Battery::apply`]; planning reads it without mutation.
///
/// # Sign Convention
/// - Positive energy: store into the battery (buying, costs money)
/// - Negative energy: release from the battery (selling, earns money)
#[derive(Debug, Clone)]
pub struct Battery {
    /// Usable pack capacity in kWh (module capacity × module count).
    capacity_kwh: f64,
    /// Maximum energy moved in one hour, in kWh (module power × count).
    power_kw: f64,
    /// Rated charge/discharge cycles before end of life.
    cycle_life: u32,
    /// Minimum price spread (ct/kWh) that justifies spending a cycle.
    relative_cost_ct: f64,
    /// Current state of charge in kWh, clamped to [0, capacity].
    charge_kwh: f64,
    /// Completed charging→discharging transitions.
    cycles: u32,
    /// Signed cumulative revenue in ct (negative while buying).
    revenue_ct: f64,
    /// Direction of the most recent non-negative charge movement; a
    /// true→discharge transition counts one cycle.
    is_charging: bool,
}

impl Battery {
    /// Builds a pack of `module_count` identical modules with the charge
    /// level initialized to 50% of capacity.
    ///
    /// # Panics
    ///
    /// Panics if capacity, power, or module count is not positive, or if
    /// the relative cost is negative.
    pub fn new(
        module_capacity_kwh: f64,
        module_power_kw: f64,
        cycle_life: u32,
        relative_cost_ct: f64,
        module_count: u32,
    ) -> Self {
        assert!(module_capacity_kwh > 0.0, "module capacity must be > 0");
        assert!(module_power_kw > 0.0, "module power must be > 0");
        assert!(module_count > 0, "module count must be > 0");
        assert!(relative_cost_ct >= 0.0, "relative cost must be >= 0");

        let capacity_kwh = module_capacity_kwh * f64::from(module_count);
        Self {
            capacity_kwh,
            power_kw: module_power_kw * f64::from(module_count),
            cycle_life,
            relative_cost_ct,
            charge_kwh: 0.5 * capacity_kwh,
            cycles: 0,
            revenue_ct: 0.0,
            is_charging: true,
        }
    }

    /// Charges or discharges by `actual_energy_kwh` at `price_ct` and
    /// updates charge, revenue, and the cycle counter.
    ///
    /// The requested movement is clamped against the physical charge
    /// bounds; the realized delta may therefore be smaller in magnitude
    /// than the request. Out-of-range requests are absorbed silently,
    /// never rejected. A cycle is counted exactly when a realized
    /// discharge follows a charging phase.
    pub fn apply(&mut self, actual_energy_kwh: f64, price_ct: f64) {
        let new_charge = (self.charge_kwh + actual_energy_kwh).clamp(0.0, self.capacity_kwh);
        let delta = new_charge - self.charge_kwh;
        self.charge_kwh = new_charge;

        if delta >= 0.0 {
            self.is_charging = true;
            self.revenue_ct -= delta.abs() * price_ct;
        } else {
            if self.is_charging {
                self.cycles += 1;
            }
            self.is_charging = false;
            self.revenue_ct += delta.abs() * price_ct;
        }
    }

    pub fn capacity_kwh(&self) -> f64 {
        self.capacity_kwh
    }

    pub fn power_kw(&self) -> f64 {
        self.power_kw
    }

    pub fn cycle_life(&self) -> u32 {
        self.cycle_life
    }

    pub fn relative_cost_ct(&self) -> f64 {
        self.relative_cost_ct
    }

    pub fn charge_kwh(&self) -> f64 {
        self.charge_kwh
    }

    /// State of charge as a fraction of capacity.
    pub fn soc(&self) -> f64 {
        self.charge_kwh / self.capacity_kwh
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn revenue_ct(&self) -> f64 {
        self.revenue_ct
    }

    pub fn is_charging(&self) -> bool {
        self.is_charging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack() -> Battery {
        Battery::new(10.0, 5.0, 1000, 1.0, 1)
    }

    #[test]
    fn new_pack_starts_half_charged() {
        let battery = pack();
        assert_eq!(battery.capacity_kwh(), 10.0);
        assert_eq!(battery.power_kw(), 5.0);
        assert_eq!(battery.charge_kwh(), 5.0);
        assert_eq!(battery.cycles(), 0);
        assert_eq!(battery.revenue_ct(), 0.0);
        assert!(battery.is_charging());
    }

    #[test]
    fn module_count_scales_capacity_and_power() {
        let battery = Battery::new(4.56, 2.4, 6000, 4.7, 43);
        assert!((battery.capacity_kwh() - 196.08).abs() < 1e-9);
        assert!((battery.power_kw() - 103.2).abs() < 1e-9);
        assert!((battery.charge_kwh() - 98.04).abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn zero_modules_panics() {
        Battery::new(10.0, 5.0, 1000, 1.0, 0);
    }

    #[test]
    #[should_panic]
    fn negative_relative_cost_panics() {
        Battery::new(10.0, 5.0, 1000, -0.1, 1);
    }

    #[test]
    fn charging_buys_energy() {
        let mut battery = pack();
        battery.apply(3.0, 2.0);
        assert_eq!(battery.charge_kwh(), 8.0);
        assert_eq!(battery.revenue_ct(), -6.0);
        assert!(battery.is_charging());
        assert_eq!(battery.cycles(), 0);
    }

    #[test]
    fn discharge_clamps_and_counts_one_cycle() {
        let mut battery = pack();
        battery.apply(3.0, 2.0);
        battery.apply(-10.0, 4.0);
        // only 8 kWh were available, so the realized delta is -8
        assert_eq!(battery.charge_kwh(), 0.0);
        assert_eq!(battery.revenue_ct(), 26.0);
        assert_eq!(battery.cycles(), 1);
        assert!(!battery.is_charging());
    }

    #[test]
    fn overcharge_is_absorbed_by_clamp() {
        let mut battery = pack();
        battery.apply(100.0, 1.0);
        assert_eq!(battery.charge_kwh(), 10.0);
        // only the realized 5 kWh movement is paid for
        assert_eq!(battery.revenue_ct(), -5.0);
    }

    #[test]
    fn repeated_discharge_counts_a_single_cycle() {
        let mut battery = pack();
        battery.apply(-1.0, 3.0);
        battery.apply(-1.0, 3.0);
        assert_eq!(battery.cycles(), 1);
        assert!(!battery.is_charging());
    }

    #[test]
    fn discharge_charge_discharge_counts_two_cycles() {
        let mut battery = pack();
        battery.apply(-1.0, 3.0);
        battery.apply(2.0, 2.0);
        battery.apply(-1.0, 3.0);
        assert_eq!(battery.cycles(), 2);
    }

    #[test]
    fn zero_delta_marks_charging_and_moves_no_money() {
        let mut battery = pack();
        battery.apply(-1.0, 3.0);
        assert!(!battery.is_charging());
        battery.apply(0.0, 3.0);
        assert!(battery.is_charging());
        assert_eq!(battery.revenue_ct(), 3.0);
    }

    #[test]
    fn charge_never_leaves_bounds() {
        let mut battery = pack();
        for step in 0..200 {
            let energy = if step % 3 == 0 { 7.0 } else { -6.5 };
            battery.apply(energy, 2.5);
            assert!(battery.charge_kwh() >= 0.0);
            assert!(battery.charge_kwh() <= battery.capacity_kwh());
        }
    }
}

use core::fmt;

use super::{Descriptor, Entry, Visitor};

/// Writes one `name (obis): value unit` line per present field.
///
/// Writing stops at the first error, which [`finish`](Self::finish) reports.
pub struct Dump<W> {
    out: W,
    result: fmt::Result,
}

impl<W: fmt::Write> Dump<W> {
    pub fn new(out: W) -> Self {
        Self { out, result: Ok(()) }
    }

    pub fn finish(self) -> Result<W, fmt::Error> {
        self.result.map(|_| self.out)
    }
}

impl<W: fmt::Write> Visitor for Dump<W> {
    fn visit<E: Entry>(&mut self, field: &Descriptor<E>) {
        if self.result.is_err() {
            return;
        }
        let Some(value) = field.value() else { return };

        self.result = match field.unit() {
            "" => writeln!(self.out, "{} ({}): {}", field.name(), field.id(), value),
            unit => writeln!(self.out, "{} ({}): {} {}", field.name(), field.id(), value, unit),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::catalog::{ElectricityTariff, EnergyDelivered, GasDelivered, Timestamp};
    use crate::fields::FieldSet;

    crate::field_set! {
        struct Sample {
            timestamp: Timestamp,
            energy_delivered: EnergyDelivered,
            electricity_tariff: ElectricityTariff,
            gas_delivered: GasDelivered,
        }
    }

    #[test]
    fn test_dump_present_fields() {
        let mut data = Sample::default();
        data.timestamp.decode("(210101120000W)").unwrap();
        data.energy_delivered.decode("(000441.879*kWh)").unwrap();
        data.gas_delivered.decode("(150117180000W)(00473.789*m3)").unwrap();

        let mut dump = Dump::new(String::new());
        data.apply(&mut dump);
        assert_eq!(
            dump.finish().unwrap(),
            "timestamp (0-0:1.0.0): 210101120000W\n\
             energy_delivered (1-0:1.8.0): 441.879 kWh\n\
             gas_delivered (0-1:24.2.1): 150117180000W 473.789 m3\n"
        );
    }

    #[test]
    fn test_dump_empty_set() {
        let mut dump = Dump::new(String::new());
        Sample::default().apply(&mut dump);
        assert_eq!(dump.finish().unwrap(), "");
    }

    struct Full(heapless::String<16>);

    impl fmt::Write for Full {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.0.push_str(s).map_err(|_| fmt::Error)
        }
    }

    #[test]
    fn test_dump_keeps_first_error() {
        let mut data = Sample::default();
        data.energy_delivered.decode("(000441.879*kWh)").unwrap();
        data.electricity_tariff.decode("(0002)").unwrap();

        let mut dump = Dump::new(Full(heapless::String::new()));
        data.apply(&mut dump);
        assert!(dump.finish().is_err());
    }
}

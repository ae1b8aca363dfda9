//! Data items of DSMR P1 telegrams (NL, BE and LU variants).
//!
//! Each item is an [`Entry`] type; [`AllFields`] holds a descriptor for
//! every one of them.

use super::units::*;
use super::variants::{
    FixedField, IntField, RawField, StringField, TimestampField, TimestampedFixedField,
};
use super::Entry;
use crate::config::{GAS_MBUS_ID, SUB_MBUS_ID, THERMAL_MBUS_ID, WATER_MBUS_ID};
use crate::obis_utils::ObisId;

/// Room for the identification line, `/` included.
pub const IDENTIFICATION_LEN: usize = 96;
/// Room for a power failure event log with ten events.
pub const FAILURE_LOG_LEN: usize = 512;
/// Room for the multi-group gas reading of older (DSMR 2.2) meters.
pub const GAS_TEXT_LEN: usize = 128;

macro_rules! catalog {
    ($(
        $(#[$doc:meta])*
        $name:ident: $entry:ident = $id:expr => $variant:ty;
    )*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
            pub struct $entry;

            impl Entry for $entry {
                const NAME: &'static str = stringify!($name);
                const ID: ObisId = $id;
                type Variant = $variant;
            }
        )*

        crate::field_set! {
            /// Every data item of the catalog, in declaration order.
            pub struct AllFields {
                $(
                    $(#[$doc])*
                    $name: $entry
                ),*
            }
        }
    };
}

catalog! {
    /// Meter identification. Not a normal data line but the `/XXX5...`
    /// header of the telegram, kept verbatim.
    identification: Identification = ObisId::from_bytes([255; 6]) => RawField<IDENTIFICATION_LEN>;

    /// Version information for P1 output
    p1_version: P1Version = ObisId::new(1, 3, 0, 2, 8) => StringField<2, 2>;
    p1_version_be: P1VersionBe = ObisId::new(0, 0, 96, 1, 4) => StringField<2, 5>;

    /// Date-time stamp of the P1 message
    timestamp: Timestamp = ObisId::new(0, 0, 1, 0, 0) => TimestampField;

    equipment_id: EquipmentId = ObisId::new(0, 0, 96, 1, 0) => StringField<0, 96>;

    /// Positive active energy (A+) total [kWh]
    energy_delivered: EnergyDelivered = ObisId::new(1, 0, 1, 8, 0) => FixedField<KWh, Wh>;
    /// Positive active energy (A+) in tariff T1 [kWh]
    energy_delivered_tariff1: EnergyDeliveredTariff1 = ObisId::new(1, 0, 1, 8, 1) => FixedField<KWh, Wh>;
    /// Positive active energy (A+) in tariff T2 [kWh]
    energy_delivered_tariff2: EnergyDeliveredTariff2 = ObisId::new(1, 0, 1, 8, 2) => FixedField<KWh, Wh>;
    /// Positive active energy (A+) in tariff T3 [kWh]
    energy_delivered_tariff3: EnergyDeliveredTariff3 = ObisId::new(1, 0, 1, 8, 3) => FixedField<KWh, Wh>;
    /// Positive active energy (A+) in tariff T4 [kWh]
    energy_delivered_tariff4: EnergyDeliveredTariff4 = ObisId::new(1, 0, 1, 8, 4) => FixedField<KWh, Wh>;

    /// Negative active energy (A-) total [kWh]
    energy_returned: EnergyReturned = ObisId::new(1, 0, 2, 8, 0) => FixedField<KWh, Wh>;
    energy_returned_tariff1: EnergyReturnedTariff1 = ObisId::new(1, 0, 2, 8, 1) => FixedField<KWh, Wh>;
    energy_returned_tariff2: EnergyReturnedTariff2 = ObisId::new(1, 0, 2, 8, 2) => FixedField<KWh, Wh>;
    energy_returned_tariff3: EnergyReturnedTariff3 = ObisId::new(1, 0, 2, 8, 3) => FixedField<KWh, Wh>;
    energy_returned_tariff4: EnergyReturnedTariff4 = ObisId::new(1, 0, 2, 8, 4) => FixedField<KWh, Wh>;

    /// Absolute active energy (|A+| + |A-|) total [kWh]
    energy_absolute: EnergyAbsolute = ObisId::new(1, 0, 15, 8, 0) => FixedField<KWh, Wh>;
    energy_absolute_tariff1: EnergyAbsoluteTariff1 = ObisId::new(1, 0, 15, 8, 1) => FixedField<KWh, Wh>;
    energy_absolute_tariff2: EnergyAbsoluteTariff2 = ObisId::new(1, 0, 15, 8, 2) => FixedField<KWh, Wh>;
    energy_absolute_tariff3: EnergyAbsoluteTariff3 = ObisId::new(1, 0, 15, 8, 3) => FixedField<KWh, Wh>;
    energy_absolute_tariff4: EnergyAbsoluteTariff4 = ObisId::new(1, 0, 15, 8, 4) => FixedField<KWh, Wh>;

    /// Sum active energy without reverse blockade (A+ - A-) total [kWh]
    energy_sumwoblockade: EnergySumwoblockade = ObisId::new(1, 0, 16, 8, 0) => FixedField<KWh, Wh>;
    energy_sumwoblockade_tariff1: EnergySumwoblockadeTariff1 = ObisId::new(1, 0, 16, 8, 1) => FixedField<KWh, Wh>;
    energy_sumwoblockade_tariff2: EnergySumwoblockadeTariff2 = ObisId::new(1, 0, 16, 8, 2) => FixedField<KWh, Wh>;
    energy_sumwoblockade_tariff3: EnergySumwoblockadeTariff3 = ObisId::new(1, 0, 16, 8, 3) => FixedField<KWh, Wh>;
    energy_sumwoblockade_tariff4: EnergySumwoblockadeTariff4 = ObisId::new(1, 0, 16, 8, 4) => FixedField<KWh, Wh>;

    // 1-0:3.8.0 is taken by reactive_power_delivered below
    /// Positive reactive energy (Q+) in tariff T1 [kvarh]
    energy_positive_reactive_tariff1: EnergyPositiveReactiveTariff1 = ObisId::new(1, 0, 3, 8, 1) => FixedField<Kvarh, Kvarh>;
    energy_positive_reactive_tariff2: EnergyPositiveReactiveTariff2 = ObisId::new(1, 0, 3, 8, 2) => FixedField<Kvarh, Kvarh>;
    energy_positive_reactive_tariff3: EnergyPositiveReactiveTariff3 = ObisId::new(1, 0, 3, 8, 3) => FixedField<Kvarh, Kvarh>;
    energy_positive_reactive_tariff4: EnergyPositiveReactiveTariff4 = ObisId::new(1, 0, 3, 8, 4) => FixedField<Kvarh, Kvarh>;

    /// Negative reactive energy (Q-) total [kvarh]
    energy_negative_reactive: EnergyNegativeReactive = ObisId::new(1, 0, 4, 8, 0) => FixedField<Kvarh, Kvarh>;
    energy_negative_reactive_tariff1: EnergyNegativeReactiveTariff1 = ObisId::new(1, 0, 4, 8, 1) => FixedField<Kvarh, Kvarh>;
    energy_negative_reactive_tariff2: EnergyNegativeReactiveTariff2 = ObisId::new(1, 0, 4, 8, 2) => FixedField<Kvarh, Kvarh>;
    energy_negative_reactive_tariff3: EnergyNegativeReactiveTariff3 = ObisId::new(1, 0, 4, 8, 3) => FixedField<Kvarh, Kvarh>;
    energy_negative_reactive_tariff4: EnergyNegativeReactiveTariff4 = ObisId::new(1, 0, 4, 8, 4) => FixedField<Kvarh, Kvarh>;

    /// Tariff indicator electricity. Can also be used to switch
    /// tariff dependent loads, e.g. boilers.
    electricity_tariff: ElectricityTariff = ObisId::new(0, 0, 96, 14, 0) => IntField<NoUnit, u8>;

    /// Current status of the breaker (ON/OFF)
    breaker_status: BreakerStatus = ObisId::new(0, 0, 96, 50, 68) => StringField<2, 3>;

    /// Actual electricity power delivered (+P) in 1 Watt resolution
    power_delivered: PowerDelivered = ObisId::new(1, 0, 1, 7, 0) => FixedField<KW, W>;
    /// Actual electricity power received (-P) in 1 Watt resolution
    power_returned: PowerReturned = ObisId::new(1, 0, 2, 7, 0) => FixedField<KW, W>;

    /// Reactive power QI..QIV [kvar]
    reactive_power_qi: ReactivePowerQi = ObisId::new(1, 0, 5, 7, 0) => FixedField<Kvar, Kvar>;
    reactive_power_qii: ReactivePowerQii = ObisId::new(1, 0, 6, 7, 0) => FixedField<Kvar, Kvar>;
    reactive_power_qiii: ReactivePowerQiii = ObisId::new(1, 0, 7, 7, 0) => FixedField<Kvar, Kvar>;
    reactive_power_qiv: ReactivePowerQiv = ObisId::new(1, 0, 8, 7, 0) => FixedField<Kvar, Kvar>;

    /// Reactive energy QI..QIV [kvarh]
    reactive_energy_qi: ReactiveEnergyQi = ObisId::new(1, 0, 5, 8, 0) => FixedField<Kvarh, Kvarh>;
    reactive_energy_qii: ReactiveEnergyQii = ObisId::new(1, 0, 6, 8, 0) => FixedField<Kvarh, Kvarh>;
    reactive_energy_qiii: ReactiveEnergyQiii = ObisId::new(1, 0, 7, 8, 0) => FixedField<Kvarh, Kvarh>;
    reactive_energy_qiv: ReactiveEnergyQiv = ObisId::new(1, 0, 8, 8, 0) => FixedField<Kvarh, Kvarh>;

    /// Positive reactive energy total (LU) [kvarh]
    reactive_power_delivered: ReactivePowerDelivered = ObisId::new(1, 0, 3, 8, 0) => FixedField<Kvarh, Kvarh>;
    /// Negative reactive power (LU) [kvar]
    reactive_power_returned: ReactivePowerReturned = ObisId::new(1, 0, 4, 7, 0) => FixedField<Kvar, Kvar>;

    /// Instantaneous power factor
    instantaneous_power_factor: InstantaneousPowerFactor = ObisId::new(1, 0, 13, 7, 0) => FixedField<NoUnit, NoUnit>;
    instantaneous_power_factor_l1: InstantaneousPowerFactorL1 = ObisId::new(1, 0, 33, 7, 0) => FixedField<NoUnit, NoUnit>;
    instantaneous_power_factor_l2: InstantaneousPowerFactorL2 = ObisId::new(1, 0, 53, 7, 0) => FixedField<NoUnit, NoUnit>;
    instantaneous_power_factor_l3: InstantaneousPowerFactorL3 = ObisId::new(1, 0, 73, 7, 0) => FixedField<NoUnit, NoUnit>;

    /// Frequency [Hz]
    frequency: Frequency = ObisId::new(1, 0, 14, 7, 0) => FixedField<Hz, Hz>;

    /// Actual threshold electricity in kW. Removed in 4.0.7 / 4.2.2 / 5.0
    electricity_threshold: ElectricityThreshold = ObisId::new(0, 0, 17, 0, 0) => FixedField<KW, W>;
    /// Switch position electricity (in/out/enabled). Removed in 4.0.7 / 4.2.2 / 5.0
    electricity_switch_position: ElectricitySwitchPosition = ObisId::new(0, 0, 96, 3, 10) => IntField<NoUnit, u8>;

    /// Number of power failures in any phase
    electricity_failures: ElectricityFailures = ObisId::new(0, 0, 96, 7, 21) => IntField<NoUnit, u32>;
    /// Number of long power failures in any phase
    electricity_long_failures: ElectricityLongFailures = ObisId::new(0, 0, 96, 7, 9) => IntField<NoUnit, u32>;

    /// Power failure event log (long power failures)
    electricity_failure_log: ElectricityFailureLog = ObisId::new(1, 0, 99, 97, 0) => RawField<FAILURE_LOG_LEN>;

    /// Number of voltage sags per phase (L2 and L3 on polyphase meters only)
    electricity_sags_l1: ElectricitySagsL1 = ObisId::new(1, 0, 32, 32, 0) => IntField<NoUnit, u32>;
    electricity_sags_l2: ElectricitySagsL2 = ObisId::new(1, 0, 52, 32, 0) => IntField<NoUnit, u32>;
    electricity_sags_l3: ElectricitySagsL3 = ObisId::new(1, 0, 72, 32, 0) => IntField<NoUnit, u32>;

    /// Number of voltage swells per phase (L2 and L3 on polyphase meters only)
    electricity_swells_l1: ElectricitySwellsL1 = ObisId::new(1, 0, 32, 36, 0) => IntField<NoUnit, u32>;
    electricity_swells_l2: ElectricitySwellsL2 = ObisId::new(1, 0, 52, 36, 0) => IntField<NoUnit, u32>;
    electricity_swells_l3: ElectricitySwellsL3 = ObisId::new(1, 0, 72, 36, 0) => IntField<NoUnit, u32>;

    /// Text message codes, numeric 8 digits (missing from 5.0)
    message_short: MessageShort = ObisId::new(0, 0, 96, 13, 1) => StringField<0, 16>;
    /// Text message of at most 2048 characters
    message_long: MessageLong = ObisId::new(0, 0, 96, 13, 0) => StringField<0, 2048>;

    /// Instantaneous voltage per phase in 0.1 V resolution
    voltage_l1: VoltageL1 = ObisId::new(1, 0, 32, 7, 0) => FixedField<V, MV>;
    voltage_l2: VoltageL2 = ObisId::new(1, 0, 52, 7, 0) => FixedField<V, MV>;
    voltage_l3: VoltageL3 = ObisId::new(1, 0, 72, 7, 0) => FixedField<V, MV>;

    /// Instantaneous current per phase in A resolution
    current_l1: CurrentL1 = ObisId::new(1, 0, 31, 7, 0) => FixedField<A, MA>;
    current_l2: CurrentL2 = ObisId::new(1, 0, 51, 7, 0) => FixedField<A, MA>;
    current_l3: CurrentL3 = ObisId::new(1, 0, 71, 7, 0) => FixedField<A, MA>;

    /// Instantaneous active power per phase (+P) in W resolution
    power_delivered_l1: PowerDeliveredL1 = ObisId::new(1, 0, 21, 7, 0) => FixedField<KW, W>;
    power_delivered_l2: PowerDeliveredL2 = ObisId::new(1, 0, 41, 7, 0) => FixedField<KW, W>;
    power_delivered_l3: PowerDeliveredL3 = ObisId::new(1, 0, 61, 7, 0) => FixedField<KW, W>;

    /// Instantaneous active power per phase (-P) in W resolution
    power_returned_l1: PowerReturnedL1 = ObisId::new(1, 0, 22, 7, 0) => FixedField<KW, W>;
    power_returned_l2: PowerReturnedL2 = ObisId::new(1, 0, 42, 7, 0) => FixedField<KW, W>;
    power_returned_l3: PowerReturnedL3 = ObisId::new(1, 0, 62, 7, 0) => FixedField<KW, W>;

    /// Instantaneous reactive power per phase (+Q), LU
    reactive_power_delivered_l1: ReactivePowerDeliveredL1 = ObisId::new(1, 0, 23, 7, 0) => FixedField<NoUnit, NoUnit>;
    reactive_power_delivered_l2: ReactivePowerDeliveredL2 = ObisId::new(1, 0, 43, 7, 0) => FixedField<NoUnit, NoUnit>;
    reactive_power_delivered_l3: ReactivePowerDeliveredL3 = ObisId::new(1, 0, 63, 7, 0) => FixedField<NoUnit, NoUnit>;

    /// Instantaneous reactive power per phase (-Q), LU
    reactive_power_returned_l1: ReactivePowerReturnedL1 = ObisId::new(1, 0, 24, 7, 0) => FixedField<NoUnit, NoUnit>;
    reactive_power_returned_l2: ReactivePowerReturnedL2 = ObisId::new(1, 0, 44, 7, 0) => FixedField<NoUnit, NoUnit>;
    reactive_power_returned_l3: ReactivePowerReturnedL3 = ObisId::new(1, 0, 64, 7, 0) => FixedField<NoUnit, NoUnit>;

    /// Gas meter device type
    gas_device_type: GasDeviceType = ObisId::new(0, GAS_MBUS_ID, 24, 1, 0) => IntField<NoUnit, u16>;
    gas_equipment_id: GasEquipmentId = ObisId::new(0, GAS_MBUS_ID, 96, 1, 0) => StringField<0, 96>;
    gas_equipment_id_be: GasEquipmentIdBe = ObisId::new(0, GAS_MBUS_ID, 96, 1, 1) => StringField<0, 96>;
    /// Valve position gas (on/off/released). Removed in 4.0.7 / 4.2.2 / 5.0
    gas_valve_position: GasValvePosition = ObisId::new(0, GAS_MBUS_ID, 24, 4, 0) => IntField<NoUnit, u8>;
    /// Last 5-minute value (temperature converted) of gas delivered in m3,
    /// with capture time. Hourly on 4.x meters.
    gas_delivered: GasDelivered = ObisId::new(0, GAS_MBUS_ID, 24, 2, 1) => TimestampedFixedField<M3, Dm3>;
    gas_delivered_be: GasDeliveredBe = ObisId::new(0, GAS_MBUS_ID, 24, 2, 3) => TimestampedFixedField<M3, Dm3>;
    gas_delivered_text: GasDeliveredText = ObisId::new(0, GAS_MBUS_ID, 24, 3, 0) => RawField<GAS_TEXT_LEN>;

    thermal_device_type: ThermalDeviceType = ObisId::new(0, THERMAL_MBUS_ID, 24, 1, 0) => IntField<NoUnit, u16>;
    /// Equipment identifier (thermal: heat or cold)
    thermal_equipment_id: ThermalEquipmentId = ObisId::new(0, THERMAL_MBUS_ID, 96, 1, 0) => StringField<0, 96>;
    thermal_valve_position: ThermalValvePosition = ObisId::new(0, THERMAL_MBUS_ID, 24, 4, 0) => IntField<NoUnit, u8>;
    /// Last 5-minute meter reading heat or cold in 0.01 GJ, with capture time
    thermal_delivered: ThermalDelivered = ObisId::new(0, THERMAL_MBUS_ID, 24, 2, 1) => TimestampedFixedField<GJ, MJ>;

    water_device_type: WaterDeviceType = ObisId::new(0, WATER_MBUS_ID, 24, 1, 0) => IntField<NoUnit, u16>;
    water_equipment_id: WaterEquipmentId = ObisId::new(0, WATER_MBUS_ID, 96, 1, 0) => StringField<0, 96>;
    water_valve_position: WaterValvePosition = ObisId::new(0, WATER_MBUS_ID, 24, 4, 0) => IntField<NoUnit, u8>;
    /// Last 5-minute meter reading in 0.001 m3, with capture time
    water_delivered: WaterDelivered = ObisId::new(0, WATER_MBUS_ID, 24, 2, 1) => TimestampedFixedField<M3, Dm3>;

    sub_device_type: SubDeviceType = ObisId::new(0, SUB_MBUS_ID, 24, 1, 0) => IntField<NoUnit, u16>;
    sub_equipment_id: SubEquipmentId = ObisId::new(0, SUB_MBUS_ID, 96, 1, 0) => StringField<0, 96>;
    sub_valve_position: SubValvePosition = ObisId::new(0, SUB_MBUS_ID, 24, 4, 0) => IntField<NoUnit, u8>;
    /// Last 5-minute reading of a sub meter (e.g. a second E meter), with
    /// capture time
    sub_delivered: SubDelivered = ObisId::new(0, SUB_MBUS_ID, 24, 2, 1) => TimestampedFixedField<M3, Dm3>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Descriptor, FieldSet, Visitor, VisitorMut};
    use crate::parser::ParseResult;

    const TELEGRAM: &str = r"/ISk5\2MT382-1000

1-3:0.2.8(50)
0-0:1.0.0(101209113020W)
0-0:96.1.1(4B384547303034303436333935353037)
1-0:1.8.1(123456.789*kWh)
1-0:1.8.2(123456.789*kWh)
1-0:2.8.1(123456.789*kWh)
1-0:2.8.2(123456.789*kWh)
0-0:96.14.0(0002)
1-0:1.7.0(01.193*kW)
1-0:2.7.0(00.000*kW)
0-0:96.7.21(00004)
0-0:96.7.9(00002)
1-0:99.97.0(2)(0-0:96.7.19)(101208152415W)(0000000240*s)(101208151004W)(0000000301*s)
1-0:32.32.0(00002)
1-0:32.36.0(00000)
0-0:96.13.0(303132333435363738393A3B3C3D3E3F)
1-0:32.7.0(220.1*V)
1-0:31.7.0(001*A)
1-0:21.7.0(01.111*kW)
1-0:22.7.0(00.000*kW)
0-1:24.1.0(003)
0-1:96.1.0(3232323241424344313233343536373839)
0-1:24.2.1(101209112500W)(12785.123*m3)
!EF2F";

    #[derive(Default)]
    struct Ids(Vec<(&'static str, ObisId)>);

    impl Visitor for Ids {
        fn visit<E: Entry>(&mut self, field: &Descriptor<E>) {
            self.0.push((field.name(), field.id()));
        }
    }

    struct Route<'a> {
        id: ObisId,
        span: &'a str,
        result: Option<ParseResult<()>>,
    }

    impl VisitorMut for Route<'_> {
        fn visit_mut<E: Entry>(&mut self, field: &mut Descriptor<E>) {
            if field.id() == self.id {
                self.result = Some(field.decode(self.span));
            }
        }
    }

    // Stand-in for the telegram reader: hands each line's value span to the
    // field with the matching id and counts lines nobody decoded.
    fn feed(data: &mut AllFields, telegram: &str) -> usize {
        let mut unmatched = 0;
        for line in telegram.lines().filter(|l| !l.is_empty() && !l.starts_with('!')) {
            let (id, span) = if line.starts_with('/') {
                (Identification::ID, line)
            } else {
                let Some(open) = line.find('(') else { continue };
                let Ok(id) = line[..open].parse::<ObisId>() else { continue };
                (id, &line[open..])
            };

            let mut route = Route { id, span, result: None };
            data.apply_mut(&mut route);
            match route.result {
                Some(result) => assert!(result.is_ok(), "{} failed: {:?}", line, result),
                None => unmatched += 1,
            }
        }
        unmatched
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids = Ids::default();
        AllFields::default().apply(&mut ids);
        assert!(ids.0.len() >= 80);

        for (i, (name, id)) in ids.0.iter().enumerate() {
            for (other, other_id) in &ids.0[i + 1..] {
                assert_ne!(id, other_id, "{} and {} share {}", name, other, id);
            }
        }
    }

    #[test]
    fn test_names_match_members() {
        let mut ids = Ids::default();
        AllFields::default().apply(&mut ids);
        assert_eq!(ids.0[0], ("identification", ObisId::from_bytes([255; 6])));
        assert_eq!(ids.0[3], ("timestamp", ObisId::new(0, 0, 1, 0, 0)));
        assert_eq!(GasDelivered::NAME, "gas_delivered");
        assert_eq!(GasDelivered::ID, ObisId::new(0, GAS_MBUS_ID, 24, 2, 1));
    }

    #[test]
    fn test_decode_telegram() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut data = AllFields::default();

        // Only the BE/NL equipment id 0-0:96.1.1 has no entry
        assert_eq!(feed(&mut data, TELEGRAM), 1);

        assert_eq!(data.identification.value().unwrap().as_str(), r"/ISk5\2MT382-1000");
        assert_eq!(data.p1_version.value().unwrap().as_str(), "50");
        assert_eq!(data.timestamp.value().unwrap().as_str(), "101209113020W");
        assert_eq!(data.energy_delivered_tariff1.value().unwrap().int_val(), 123_456_789);
        assert_eq!(data.energy_returned_tariff2.value().unwrap().int_val(), 123_456_789);
        assert_eq!(data.electricity_tariff.value(), Some(&2));
        assert_eq!(data.power_delivered.value().unwrap().int_val(), 1193);
        assert_eq!(data.power_returned.value().unwrap().int_val(), 0);
        assert_eq!(data.electricity_failures.value(), Some(&4));
        assert_eq!(data.electricity_long_failures.value(), Some(&2));
        assert_eq!(
            data.electricity_failure_log.value().unwrap().as_str(),
            "(2)(0-0:96.7.19)(101208152415W)(0000000240*s)(101208151004W)(0000000301*s)"
        );
        assert_eq!(data.electricity_sags_l1.value(), Some(&2));
        assert_eq!(data.electricity_swells_l1.value(), Some(&0));
        assert_eq!(data.message_long.value().unwrap().as_str(), "303132333435363738393A3B3C3D3E3F");
        assert_eq!(data.voltage_l1.value().unwrap().int_val(), 220_100);
        assert_eq!(data.current_l1.value().unwrap().int_val(), 1000);
        assert_eq!(data.power_delivered_l1.value().unwrap().int_val(), 1111);
        assert_eq!(data.gas_device_type.value(), Some(&3));
        assert_eq!(
            data.gas_equipment_id.value().unwrap().as_str(),
            "3232323241424344313233343536373839"
        );

        let gas = data.gas_delivered.value().unwrap();
        assert_eq!(gas.timestamp(), "101209112500W");
        assert_eq!(gas.int_val(), 12_785_123);

        assert!(!data.energy_delivered.is_present());
        assert!(!data.equipment_id.is_present());
        assert!(!data.water_delivered.is_present());

        data.reset();
        assert!(!data.gas_delivered.is_present());
        assert!(!data.identification.is_present());
    }

    #[test]
    fn test_integer_unit_firmware() {
        let mut data = AllFields::default();
        let telegram = "1-0:1.8.0(000441879*Wh)\n\
                        1-0:32.7.0(230100*mV)\n\
                        0-1:24.2.1(150117180000W)(00473789*dm3)";
        assert_eq!(feed(&mut data, telegram), 0);

        assert_eq!(data.energy_delivered.value().unwrap().int_val(), 441_879);
        assert_eq!(data.voltage_l1.value().unwrap().int_val(), 230_100);
        assert_eq!(data.gas_delivered.value().unwrap().int_val(), 473_789);
    }
}

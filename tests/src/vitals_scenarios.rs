//! Vital-Sign Alert Scenarios
//!
//! Clinical situations a patient or doctor would recognize, replayed
//! through the evaluator.

#[cfg(test)]
mod tests {
    use crate::fixtures::{reference_time, PregnancyTimeline};
    use chrono::Duration;
    use prenatal_vitals::{
        evaluate_vital_alerts, highest_severity, AlertSeverity, AlertType, PreviousReading,
        VitalAlert, VitalReading,
    };

    fn types(alerts: &[VitalAlert]) -> Vec<AlertType> {
        alerts.iter().map(|a| a.alert_type).collect()
    }

    #[test]
    fn test_uneventful_first_trimester() {
        let results = PregnancyTimeline::new()
            .on_day(0, VitalReading::new().with_blood_pressure(112, 70).with_weight(58.0).with_week(8))
            .on_day(28, VitalReading::new().with_blood_pressure(110, 72).with_weight(58.9).with_week(12))
            .on_day(56, VitalReading::new().with_blood_pressure(115, 74).with_weight(60.1).with_week(16))
            .evaluate_all();

        assert!(results.iter().all(|alerts| alerts.is_empty()));
    }

    #[test]
    fn test_preeclampsia_warning_signs() {
        // Rising pressure with sudden weight gain late in the third trimester
        let results = PregnancyTimeline::new()
            .on_day(0, VitalReading::new().with_blood_pressure(118, 76).with_weight(72.0).with_week(33))
            .on_day(7, VitalReading::new().with_blood_pressure(134, 86).with_weight(73.2).with_week(34))
            .on_day(10, VitalReading::new().with_blood_pressure(152, 98).with_weight(75.1).with_week(34))
            .evaluate_all();

        assert!(results[0].is_empty());

        assert_eq!(types(&results[1]), vec![AlertType::HighBloodPressure]);
        assert_eq!(results[1][0].severity, AlertSeverity::Warning);

        // 1.9 kg in 3 days is about 4.4 kg per week
        assert_eq!(
            types(&results[2]),
            vec![AlertType::HighBloodPressure, AlertType::RapidWeightGain]
        );
        assert_eq!(results[2][0].severity, AlertSeverity::Critical);
        assert!(results[2][0].requires_immediate_attention());
        assert!(results[2][1].message.contains("4.4 kg"));
    }

    #[test]
    fn test_gestational_diabetes_screening() {
        let borderline = VitalReading::new().with_glucose(110.0).with_week(26);
        let alerts = evaluate_vital_alerts(&borderline, None, Some(reference_time()));
        assert_eq!(highest_severity(&alerts), Some(AlertSeverity::Warning));

        let high = VitalReading::new().with_glucose(180.0).with_week(26);
        let alerts = evaluate_vital_alerts(&high, None, Some(reference_time()));
        assert_eq!(highest_severity(&alerts), Some(AlertSeverity::Critical));
    }

    #[test]
    fn test_fetal_movement_count_before_and_after_week_28() {
        let early = VitalReading::new().with_week(24).with_fetal_movement(1);
        assert!(evaluate_vital_alerts(&early, None, Some(reference_time())).is_empty());

        let late = VitalReading::new().with_week(38).with_fetal_movement(1);
        let alerts = evaluate_vital_alerts(&late, None, Some(reference_time()));
        assert_eq!(types(&alerts), vec![AlertType::ReducedFetalMovement]);
        assert!(alerts[0].requires_immediate_attention());
    }

    #[test]
    fn test_resting_athlete_low_heart_rate_is_informational() {
        let reading = VitalReading::new()
            .with_heart_rate(52)
            .with_blood_pressure(108, 68)
            .with_spo2(99);
        let alerts = evaluate_vital_alerts(&reading, None, Some(reference_time()));
        assert_eq!(types(&alerts), vec![AlertType::LowHeartRate]);
        assert_eq!(highest_severity(&alerts), Some(AlertSeverity::Info));
        assert!(!alerts[0].requires_immediate_attention());
    }

    #[test]
    fn test_hypotension_and_tachycardia() {
        let reading = VitalReading::new().with_blood_pressure(84, 52).with_heart_rate(112);
        let alerts = evaluate_vital_alerts(&reading, None, Some(reference_time()));
        assert_eq!(
            types(&alerts),
            vec![AlertType::LowBloodPressure, AlertType::HighHeartRate]
        );
        assert!(alerts.iter().all(|a| a.severity == AlertSeverity::Warning));
    }

    #[test]
    fn test_backdated_reading_skips_weight_gain() {
        // The previous weight was logged after the current reading's timestamp
        let previous = PreviousReading::new(60.0, reference_time() + Duration::days(2));
        let reading = VitalReading::new().with_weight(70.0);
        assert!(evaluate_vital_alerts(&reading, Some(&previous), Some(reference_time())).is_empty());
    }

    #[test]
    fn test_timeline_weight_context_skips_readings_without_weight() {
        let results = PregnancyTimeline::new()
            .on_day(0, VitalReading::new().with_weight(64.0))
            .on_day(3, VitalReading::new().with_blood_pressure(120, 75))
            .on_day(14, VitalReading::new().with_weight(65.5))
            .evaluate_all();

        // Day 14 compares against day 0: 1.5 kg over two weeks
        assert!(results.iter().all(|alerts| alerts.is_empty()));
    }
}

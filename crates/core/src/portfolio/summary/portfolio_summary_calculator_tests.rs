#[cfg(test)]
mod tests {
    use crate::portfolio::holdings::{Holding, HoldingSummary};
    use crate::portfolio::summary::portfolio_summary_calculator::{
        PortfolioSummaryCalculator, PortfolioSummaryCalculatorTrait,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn assert_close(actual: Option<Decimal>, expected: Decimal) {
        let actual = actual.expect("expected a value");
        assert!(
            (actual - expected).abs() <= dec!(0.01),
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn summary(
        holding: Holding,
        current_value: Option<Decimal>,
        total_investment: Option<Decimal>,
        total_pnl: Option<Decimal>,
        total_pnl_percentage: Option<Decimal>,
        todays_pnl: Option<Decimal>,
        todays_pnl_percentage: Option<Decimal>,
    ) -> HoldingSummary {
        HoldingSummary {
            holding: Some(holding),
            current_value,
            total_investment,
            total_pnl,
            total_pnl_percentage,
            todays_pnl,
            todays_pnl_percentage,
        }
    }

    #[test]
    fn test_calculate_mixed_profits_and_losses() {
        let calculator = PortfolioSummaryCalculator::new();
        let summaries = vec![
            summary(
                Holding::new("MAHABANK", 990, dec!(38.05), dec!(35.0), dec!(40.0)),
                Some(dec!(37669.50)),
                Some(dec!(34650.0)),
                Some(dec!(3019.50)),
                Some(dec!(8.71)),
                Some(dec!(1930.50)),
                Some(dec!(5.12)),
            ),
            summary(
                Holding::new("ICICI", 100, dec!(118.25), dec!(110.0), dec!(105.0)),
                Some(dec!(11825.0)),
                Some(dec!(11000.0)),
                Some(dec!(825.0)),
                Some(dec!(7.50)),
                Some(dec!(-1325.0)),
                Some(dec!(-11.20)),
            ),
            summary(
                Holding::new("SBI", 150, dec!(550.05), dec!(501.0), dec!(590.0)),
                Some(dec!(82507.50)),
                Some(dec!(75150.0)),
                Some(dec!(7357.50)),
                Some(dec!(9.79)),
                Some(dec!(5992.50)),
                Some(dec!(7.26)),
            ),
        ];

        let result = calculator.calculate(Some(summaries.as_slice())).unwrap();

        assert_eq!(result.current_value, Some(dec!(132002.0)));
        assert_eq!(result.total_investment, Some(dec!(120800.0)));
        assert_eq!(result.total_pnl, Some(dec!(11202.0)));
        assert_close(result.total_pnl_percentage, dec!(9.27));
        assert_eq!(result.todays_pnl, Some(dec!(6598.0)));
        assert_close(result.todays_pnl_percentage, dec!(5.00));
    }

    #[test]
    fn test_calculate_all_losses() {
        let calculator = PortfolioSummaryCalculator::new();
        let summaries = vec![
            summary(
                Holding::new("STOCK1", 100, dec!(50.0), dec!(60.0), dec!(45.0)),
                Some(dec!(5000.0)),
                Some(dec!(6000.0)),
                Some(dec!(-1000.0)),
                Some(dec!(-16.67)),
                Some(dec!(-500.0)),
                Some(dec!(-10.0)),
            ),
            summary(
                Holding::new("STOCK2", 200, dec!(25.0), dec!(30.0), dec!(24.0)),
                Some(dec!(5000.0)),
                Some(dec!(6000.0)),
                Some(dec!(-1000.0)),
                Some(dec!(-16.67)),
                Some(dec!(-200.0)),
                Some(dec!(-4.0)),
            ),
        ];

        let result = calculator.calculate(Some(summaries.as_slice())).unwrap();

        assert_eq!(result.current_value, Some(dec!(10000.0)));
        assert_eq!(result.total_investment, Some(dec!(12000.0)));
        assert_eq!(result.total_pnl, Some(dec!(-2000.0)));
        assert_close(result.total_pnl_percentage, dec!(-16.67));
        assert_eq!(result.todays_pnl, Some(dec!(-700.0)));
        assert_eq!(result.todays_pnl_percentage, Some(dec!(-7.0)));
    }

    #[test]
    fn test_calculate_empty_list_returns_none() {
        let calculator = PortfolioSummaryCalculator::new();
        assert!(calculator.calculate(Some(&[][..])).is_none());
    }

    #[test]
    fn test_calculate_absent_list_returns_none() {
        let calculator = PortfolioSummaryCalculator::new();
        assert!(calculator.calculate(None).is_none());
    }

    #[test]
    fn test_calculate_zero_investment() {
        let calculator = PortfolioSummaryCalculator::new();
        let summaries = vec![summary(
            Holding::new("FREE_STOCK", 100, dec!(50.0), dec!(0.0), dec!(55.0)),
            Some(dec!(5000.0)),
            Some(dec!(0.0)),
            Some(dec!(5000.0)),
            None,
            Some(dec!(500.0)),
            Some(dec!(10.0)),
        )];

        let result = calculator.calculate(Some(summaries.as_slice())).unwrap();

        assert_eq!(result.current_value, Some(dec!(5000.0)));
        assert_eq!(result.total_investment, Some(dec!(0.0)));
        assert_eq!(result.total_pnl, Some(dec!(5000.0)));
        assert!(result.total_pnl_percentage.is_none());
        assert_eq!(result.todays_pnl, Some(dec!(500.0)));
        assert_eq!(result.todays_pnl_percentage, Some(dec!(10.0)));
    }

    #[test]
    fn test_calculate_partial_values_sums_only_present() {
        let calculator = PortfolioSummaryCalculator::new();
        let summaries = vec![
            summary(
                Holding::new("STOCK1", 100, dec!(50.0), dec!(60.0), dec!(45.0)),
                Some(dec!(5000.0)),
                Some(dec!(6000.0)),
                Some(dec!(-1000.0)),
                Some(dec!(-16.67)),
                None,
                None,
            ),
            summary(
                Holding::new("STOCK2", 200, dec!(25.0), dec!(30.0), dec!(24.0)),
                None,
                None,
                None,
                None,
                Some(dec!(-200.0)),
                Some(dec!(-4.0)),
            ),
        ];

        let result = calculator.calculate(Some(summaries.as_slice())).unwrap();

        assert_eq!(result.current_value, Some(dec!(5000.0)));
        assert_eq!(result.total_investment, Some(dec!(6000.0)));
        assert_eq!(result.total_pnl, Some(dec!(-1000.0)));
        assert_close(result.total_pnl_percentage, dec!(-16.67));
        assert_eq!(result.todays_pnl, Some(dec!(-200.0)));
        // Aggregate base is the current value: -200 / 5000
        assert_eq!(result.todays_pnl_percentage, Some(dec!(-4.0)));
    }

    #[test]
    fn test_calculate_nothing_present_yields_empty_summary() {
        let calculator = PortfolioSummaryCalculator::new();
        let summaries = vec![HoldingSummary::default(), HoldingSummary::default()];

        let result = calculator.calculate(Some(summaries.as_slice())).unwrap();

        assert!(result.current_value.is_none());
        assert!(result.total_investment.is_none());
        assert!(result.total_pnl.is_none());
        assert!(result.total_pnl_percentage.is_none());
        assert!(result.todays_pnl.is_none());
        assert!(result.todays_pnl_percentage.is_none());
    }

    #[test]
    fn test_calculate_zero_current_value_has_no_todays_percentage() {
        let calculator = PortfolioSummaryCalculator::new();
        let summaries = vec![HoldingSummary {
            current_value: Some(dec!(0)),
            total_investment: Some(dec!(5000.0)),
            todays_pnl: Some(dec!(5500.0)),
            ..Default::default()
        }];

        let result = calculator.calculate(Some(summaries.as_slice())).unwrap();

        assert_eq!(result.total_pnl, Some(dec!(-5000.0)));
        assert_eq!(result.total_pnl_percentage, Some(dec!(-100)));
        assert!(result.todays_pnl_percentage.is_none());
    }
}

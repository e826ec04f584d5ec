//! Two-year comparison example.
//!
//! Builds a small catalog in memory, renders 1980 against 2024 and then
//! changes the left-hand year, the way a user would.

use rust_decimal_macros::dec;
use work_value::core::record::{Dataset, DatasetCatalog, DatasetName, YearlyRecord};
use work_value::core::year::EngineConfig;
use work_value::presentation::dashboard::Dashboard;
use work_value::presentation::sink::{Side, TableSink};

fn catalog() -> DatasetCatalog {
    let mut catalog = DatasetCatalog::new();
    catalog.insert(Dataset::new(
        DatasetName::MinimumWage,
        vec![
            YearlyRecord::new(1974).with_value("min_wage", dec!(2.00)),
            YearlyRecord::new(1978).with_value("min_wage", dec!(2.65)),
            YearlyRecord::new(1980).with_value("min_wage", dec!(3.10)),
            YearlyRecord::new(2009).with_value("min_wage", dec!(7.25)),
        ],
    ));
    catalog.insert(Dataset::new(
        DatasetName::MedianPersonalIncome,
        vec![
            YearlyRecord::new(1975).with_value("median_personal_income", dec!(5270)),
            YearlyRecord::new(1980).with_value("median_personal_income", dec!(7930)),
            YearlyRecord::new(2023).with_value("median_personal_income", dec!(42220)),
        ],
    ));
    catalog.insert(Dataset::new(
        DatasetName::AverageSalary,
        vec![
            YearlyRecord::new(1975).with_value("avg_salary", dec!(8630)),
            YearlyRecord::new(1980).with_value("avg_salary", dec!(12513)),
            YearlyRecord::new(2023).with_value("avg_salary", dec!(66621)),
        ],
    ));
    catalog.insert(Dataset::new(
        DatasetName::AverageHomePrice,
        vec![
            YearlyRecord::new(1975).with_value("avg_home_price", dec!(42600)),
            YearlyRecord::new(1980).with_value("avg_home_price", dec!(76400)),
            YearlyRecord::new(2024).with_value("avg_home_price", dec!(501100)),
        ],
    ));
    catalog.insert(Dataset::new(
        DatasetName::AverageTuitionPrice,
        vec![
            YearlyRecord::new(1980)
                .with_value("public_4yr", dec!(804))
                .with_value("private_nonprofit_4yr", dec!(3617)),
            YearlyRecord::new(2023)
                .with_value("public_4yr", dec!(11260))
                .with_value("private_nonprofit_4yr", dec!(41540)),
        ],
    ));
    catalog
}

fn main() {
    println!("━━━ work-value: 1980 vs 2024 ━━━\n");

    let mut dashboard = Dashboard::new(catalog(), &EngineConfig::default());
    let mut sink = TableSink::new();
    dashboard.initialize(1980, 2024, &mut sink);
    println!("{}", dashboard.report());

    println!("━━━ Changing year A to 1976 ━━━\n");
    dashboard.select_year(Side::A, 1976, &mut sink);
    for id in [
        "yearAMinWage",
        "compareMinWage",
        "yearAMinWageHoursForAverageHome",
        "compareMinWageHoursForAverageHome",
    ] {
        println!(
            "{:<36} {} {}",
            id,
            sink.text(id).unwrap_or("-"),
            sink.class(id).as_str()
        );
    }
}

//! Interactive menu loop
//!
//! Reads one option or field per line and writes labelled plain-text
//! results. Generic over the reader and writer so sessions can be scripted.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use tollgate_app::TollBooth;
use tollgate_domain::model::VehicleDetails;
use tollgate_types::{Error, Result, VehicleCategory};

use crate::output;

/// A numbered menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddVehicle(VehicleCategory),
    PassWithoutPaying,
    ShowTotalVehicles,
    ShowTotalTaxCollected,
    ShowTaxPayingVehicles,
    ShowNonTaxPayingVehicles,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        let choice = match n {
            1 => MenuChoice::AddVehicle(VehicleCategory::Car),
            2 => MenuChoice::AddVehicle(VehicleCategory::Bike),
            3 => MenuChoice::AddVehicle(VehicleCategory::HeavyVehicle),
            4 => MenuChoice::PassWithoutPaying,
            5 => MenuChoice::ShowTotalVehicles,
            6 => MenuChoice::ShowTotalTaxCollected,
            7 => MenuChoice::ShowTaxPayingVehicles,
            8 => MenuChoice::ShowNonTaxPayingVehicles,
            9 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, R, W> {
    input: R,
    output: W,
    currency_symbol: &'a str,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(input: R, output: W, currency_symbol: &'a str) -> Self {
        Self {
            input,
            output,
            currency_symbol,
        }
    }

    /// Run until the operator exits or input ends
    pub fn run(&mut self, booth: &mut TollBooth) -> Result<()> {
        loop {
            self.display_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let choice = match parse_number(&line) {
                Ok(n) => MenuChoice::from_number(n),
                Err(e) => {
                    tracing::debug!(error = %e, "unparseable menu selection");
                    writeln!(
                        self.output,
                        "Invalid input, please enter a number between 1 and 9."
                    )?;
                    continue;
                }
            };

            let flow = match choice {
                Some(MenuChoice::AddVehicle(category)) => self.add_vehicle(booth, category)?,
                Some(MenuChoice::PassWithoutPaying) => self.pass_by_category(booth)?,
                Some(MenuChoice::ShowTotalVehicles) => {
                    writeln!(self.output, "{}", output::total_vehicles_line(booth.ledger()))?;
                    Flow::Continue
                }
                Some(MenuChoice::ShowTotalTaxCollected) => {
                    writeln!(
                        self.output,
                        "{}",
                        output::total_tax_collected_line(booth.ledger(), self.currency_symbol)
                    )?;
                    Flow::Continue
                }
                Some(MenuChoice::ShowTaxPayingVehicles) => {
                    writeln!(self.output, "{}", output::tax_paying_line(booth.ledger()))?;
                    Flow::Continue
                }
                Some(MenuChoice::ShowNonTaxPayingVehicles) => {
                    writeln!(self.output, "{}", output::non_tax_paying_line(booth.ledger()))?;
                    Flow::Continue
                }
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    writeln!(
                        self.output,
                        "Invalid choice, please enter a number between 1 and 9."
                    )?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "1. Add Car")?;
        writeln!(self.output, "2. Add Bike")?;
        writeln!(self.output, "3. Add Heavy Vehicle")?;
        writeln!(self.output, "4. Pass without Paying")?;
        writeln!(self.output, "5. Show Total Vehicles")?;
        writeln!(self.output, "6. Show Total Tax Collected")?;
        writeln!(self.output, "7. Show Total Tax Paying Vehicles")?;
        writeln!(self.output, "8. Show Total Non-Tax Paying Vehicles")?;
        writeln!(self.output, "9. Exit")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next line without its line ending, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    fn add_vehicle(&mut self, booth: &mut TollBooth, category: VehicleCategory) -> Result<Flow> {
        let label = category.label();

        let Some(reg_no) = self.prompt(&format!("Enter Registration Number for {}:", label))? else {
            return Ok(Flow::Exit);
        };
        let Some(model) = self.prompt(&format!("Enter Model for {}:", label))? else {
            return Ok(Flow::Exit);
        };
        let Some(brand) = self.prompt(&format!("Enter Brand for {}:", label))? else {
            return Ok(Flow::Exit);
        };
        let Some(base_price) = self.prompt_price(label)? else {
            return Ok(Flow::Exit);
        };

        let id = booth.admit(category, VehicleDetails::new(reg_no, model, brand, base_price));

        let Some(line) = self.prompt("Press 1 to pay tax, or 2 to pass without paying:")? else {
            return Ok(Flow::Exit);
        };
        match parse_number(&line) {
            Ok(1) => match booth.pay_tax(id) {
                Ok(_) => writeln!(self.output, "{} has paid the tax.", label)?,
                Err(e) => self.report_settlement_error(label, e)?,
            },
            Ok(2) => match booth.pass_without_paying(id) {
                Ok(()) => writeln!(self.output, "{} passed without paying.", label)?,
                Err(e) => self.report_settlement_error(label, e)?,
            },
            parsed => {
                if parsed.is_err() {
                    writeln!(
                        self.output,
                        "Invalid input, please enter a number between 1 and 9."
                    )?;
                }
                tracing::debug!(vehicle_id = id, input = %line, "vehicle left pending");
                writeln!(self.output, "Invalid choice, please enter 1 or 2.")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Re-prompt until the base price parses as a non-negative decimal
    fn prompt_price(&mut self, label: &str) -> Result<Option<Decimal>> {
        loop {
            let Some(line) = self.prompt(&format!("Enter Base Price for {}:", label))? else {
                return Ok(None);
            };
            match parse_price(&line) {
                Ok(price) => return Ok(Some(price)),
                Err(e) => {
                    tracing::debug!(error = %e, "base price rejected");
                    writeln!(
                        self.output,
                        "Invalid base price, please enter a non-negative number."
                    )?;
                }
            }
        }
    }

    fn pass_by_category(&mut self, booth: &mut TollBooth) -> Result<Flow> {
        let Some(label) = self.prompt("Enter Vehicle Type (Car, Bike, Heavy Vehicle):")? else {
            return Ok(Flow::Exit);
        };

        match booth.pass_without_paying_by_category(&label) {
            Ok(vehicle) => {
                let category = vehicle.category();
                writeln!(self.output, "{} passed without paying.", category.label())?;
            }
            Err(Error::VehicleNotFound(_)) => {
                writeln!(self.output, "No such vehicle found.")?;
            }
            Err(e @ Error::AlreadySettled(_)) => {
                let label = VehicleCategory::from_str(&label)
                    .map(|c| c.label())
                    .unwrap_or("Vehicle");
                self.report_settlement_error(label, e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn report_settlement_error(&mut self, label: &str, error: Error) -> Result<()> {
        match error {
            Error::AlreadySettled(_) => {
                writeln!(self.output, "{} has already been settled.", label)?;
                Ok(())
            }
            other => Err(other),
        }
    }
}

fn parse_number(line: &str) -> Result<i64> {
    line.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidChoice(line.trim().to_string()))
}

fn parse_price(line: &str) -> Result<Decimal> {
    let price = Decimal::from_str(line.trim())
        .map_err(|e| Error::InvalidPrice(format!("{}: {}", line.trim(), e)))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(Error::InvalidPrice(format!("{} is negative", price)));
    }
    Ok(price)
}

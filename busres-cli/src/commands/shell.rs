//! Interactive menu shell.
//!
//! The shell opens the data files once and then loops over a numbered
//! menu, prompting for each operation's inputs and dispatching to the same
//! code paths as the one-shot subcommands. Errors are printed and the loop
//! moves on to the next choice; only option 11 or end of input ends the
//! session.

use crate::commands::{
    BusesCommand, CancelCommand, CustomersCommand, RegisterBusCommand, RegisterCustomerCommand,
    RequestSeatCommand, ReservationsCommand, ReserveCommand, SearchCommand, WaitingListCommand,
};
use crate::error::CliError;
use crate::utils::{open_state, AppState, GlobalOptions};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "\
********************************
*       Bus Reservation        *
********************************
* 1. Register Customer         *
* 2. View Registered Customers *
* 3. Register New Bus          *
* 4. View Registered Buses     *
* 5. Search Bus                *
* 6. Reserve Seat              *
* 7. Cancel Seat Reservation   *
* 8. Request Additional Seat   *
* 9. View Reservations         *
* 10. View Waiting Queue       *
* 11. Exit                     *
********************************";

/// Start the interactive menu.
#[derive(Args)]
pub struct ShellCommand {}

impl ShellCommand {
    /// Execute the shell command on stdin and stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let state = open_state(global)?;
        let stdin = io::stdin();
        let stdout = io::stdout();
        Shell::new(state, stdin.lock(), stdout.lock()).run()
    }
}

/// Whether the loop keeps going after a menu action.
enum Flow {
    Continue,
    Exit,
}

/// The menu loop over arbitrary input and output streams.
pub struct Shell<R, W> {
    state: AppState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over opened state.
    pub fn new(state: AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Only failures to read input or write output end the loop with an
    /// error; errors from the operations themselves are printed.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.ask("Enter your choice: ")? else {
                return Ok(());
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(CliError::Io(e)) => return Err(CliError::Io(e)),
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }
    }

    /// Consume the shell, returning the state and output streams.
    pub fn into_parts(self) -> (AppState, W) {
        (self.state, self.output)
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow, CliError> {
        match choice {
            "1" => self.register_customer(),
            "2" => {
                CustomersCommand { format: None }.run(&self.state, &mut self.output)?;
                Ok(Flow::Continue)
            }
            "3" => self.register_bus(),
            "4" => {
                BusesCommand { format: None }.run(&self.state, &mut self.output)?;
                Ok(Flow::Continue)
            }
            "5" => self.search(),
            "6" => self.booking(|customer, bus| Booking::Reserve(ReserveCommand { customer, bus })),
            "7" => self.booking(|customer, bus| Booking::Cancel(CancelCommand { customer, bus })),
            "8" => self.booking(|customer, bus| {
                Booking::RequestSeat(RequestSeatCommand { customer, bus })
            }),
            "9" => self.view_reservations(),
            "10" => self.view_waiting_list(),
            "11" => {
                writeln!(self.output, "Exiting...")?;
                Ok(Flow::Exit)
            }
            _ => {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn register_customer(&mut self) -> Result<Flow, CliError> {
        let Some([name, mobile, email, city, age]) = self.ask_all([
            "Enter name: ",
            "Enter mobile number: ",
            "Enter email: ",
            "Enter city: ",
            "Enter age: ",
        ])?
        else {
            return Ok(Flow::Exit);
        };

        RegisterCustomerCommand {
            name,
            mobile,
            email,
            city,
            age: parse_number("age", &age)?,
        }
        .run(&mut self.state, &mut self.output)?;
        Ok(Flow::Continue)
    }

    fn register_bus(&mut self) -> Result<Flow, CliError> {
        let Some([bus_number, seats, start_point, end_point, start_time, fare]) = self.ask_all([
            "Enter bus number: ",
            "Enter total seats: ",
            "Enter start point: ",
            "Enter end point: ",
            "Enter start time: ",
            "Enter fare: ",
        ])?
        else {
            return Ok(Flow::Exit);
        };

        RegisterBusCommand {
            bus_number,
            seats: parse_number("total seats", &seats)?,
            start_point,
            end_point,
            start_time,
            fare: parse_number("fare", &fare)?,
        }
        .run(&mut self.state, &mut self.output)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow, CliError> {
        let Some([from, to]) = self.ask_all(["Enter start point: ", "Enter end point: "])? else {
            return Ok(Flow::Exit);
        };

        SearchCommand {
            from,
            to,
            format: None,
        }
        .run(&self.state, &mut self.output)?;
        Ok(Flow::Continue)
    }

    /// Ask for a customer, check it is registered, then ask for the bus.
    fn booking(&mut self, command: fn(String, String) -> Booking) -> Result<Flow, CliError> {
        let Some(name) = self.ask("Enter customer name: ")? else {
            return Ok(Flow::Exit);
        };
        self.state.customer(&name)?;
        let Some(bus) = self.ask("Enter bus number: ")? else {
            return Ok(Flow::Exit);
        };

        match command(name, bus) {
            Booking::Reserve(cmd) => cmd.run(&mut self.state, &mut self.output)?,
            Booking::Cancel(cmd) => cmd.run(&mut self.state, &mut self.output)?,
            Booking::RequestSeat(cmd) => cmd.run(&mut self.state, &mut self.output)?,
        }
        Ok(Flow::Continue)
    }

    fn view_reservations(&mut self) -> Result<Flow, CliError> {
        let Some(bus) = self.ask("Enter bus number: ")? else {
            return Ok(Flow::Exit);
        };

        ReservationsCommand { bus, format: None }.run(&self.state, &mut self.output)?;
        Ok(Flow::Continue)
    }

    fn view_waiting_list(&mut self) -> Result<Flow, CliError> {
        let Some(bus) = self.ask("Enter bus number: ")? else {
            return Ok(Flow::Exit);
        };

        WaitingListCommand { bus, format: None }.run(&self.state, &mut self.output)?;
        Ok(Flow::Continue)
    }

    /// Prompt and read one line. `None` means input ended.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask_all<const N: usize>(&mut self, prompts: [&str; N]) -> io::Result<Option<[String; N]>> {
        let mut answers = Vec::with_capacity(N);
        for prompt in prompts {
            match self.ask(prompt)? {
                Some(answer) => answers.push(answer),
                None => return Ok(None),
            }
        }
        Ok(answers.try_into().ok())
    }
}

/// A customer-and-bus operation chosen from the menu.
enum Booking {
    Reserve(ReserveCommand),
    Cancel(CancelCommand),
    RequestSeat(RequestSeatCommand),
}

fn parse_number<T: FromStr>(field: &str, value: &str) -> Result<T, CliError> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidArguments(format!("{field} must be a number, got '{value}'")))
}

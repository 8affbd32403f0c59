use basic::lang::Error;
use basic::mach::{Event, Runtime};

#[allow(dead_code)]
pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Collects printed output until the runtime stops or asks for input.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
            Event::List(ls) => {
                s.push_str(&format!("{}\n", ls));
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

/// The first error reported before the runtime stops or asks for input.
#[allow(dead_code)]
pub fn exec_error(runtime: &mut Runtime) -> Option<Error> {
    for _ in 0..100 {
        match runtime.execute(5000) {
            Event::Error(error) => return Some(error),
            Event::Stopped | Event::Input(_) => return None,
            _ => {}
        }
    }
    None
}

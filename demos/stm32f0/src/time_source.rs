use core::cell::Cell;
use critical_section::Mutex;
use control_panel::{Millis, TimeSource};

/// Global millisecond counter incremented by the SysTick interrupt.
///
/// Wraps after ~49.7 days; `Millis` measures elapsed time with wrapping
/// subtraction so debouncing is unaffected.
static MILLIS_COUNTER: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Increments the global millisecond counter.
///
/// Call from the SysTick handler every 1ms.
pub fn tick() {
    critical_section::with(|cs| {
        let counter = MILLIS_COUNTER.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}

/// Time source reading the SysTick millisecond counter
pub struct HalTimeSource;

impl HalTimeSource {
    pub fn new() -> Self {
        Self
    }
}

impl TimeSource<Millis> for HalTimeSource {
    fn now(&self) -> Millis {
        critical_section::with(|cs| Millis(MILLIS_COUNTER.borrow(cs).get()))
    }
}

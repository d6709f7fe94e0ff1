//! Ranging Game Main Application
//!
//! Entry point for the STM32G474 game controller firmware.
//! Echo edges are timed on an interrupt-priority executor; the game itself
//! runs as a plain blocking loop on the thread context.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{info, unwrap};
use embassy_executor::InterruptExecutor;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_stm32::usart::{self, BufferedUart};
use embassy_stm32::{bind_interrupts, peripherals};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use ranging_game::prelude::*;

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    LPUART1 => usart::BufferedInterruptHandler<peripherals::LPUART1>;
});

/// Echo timing shared between the edge task and the game loop
static ECHO: EchoCapture = EchoCapture::new();

/// Executor for the echo edge task, preempts the blocking game loop
static EXECUTOR_ECHO: InterruptExecutor = InterruptExecutor::new();

static TX_RING: StaticCell<[u8; UART_TX_RING_SIZE]> = StaticCell::new();
static RX_RING: StaticCell<[u8; UART_RX_RING_SIZE]> = StaticCell::new();

#[interrupt]
unsafe fn UART4() {
    EXECUTOR_ECHO.on_interrupt();
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Ranging Game Firmware v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // UART4 is unused as a peripheral; its vector hosts the echo executor
    interrupt::UART4.set_priority(Priority::P6);
    let spawner = EXECUTOR_ECHO.start(interrupt::UART4);

    // Echo on D6 (PB10 / EXTI10)
    let echo = ExtiInput::new(p.PB10, p.EXTI10, Pull::None);
    unwrap!(spawner.spawn(echo_task(echo)));

    // Trigger on D7 (PA8)
    let trigger = Output::new(p.PA8, Level::Low, Speed::Low);
    let rangefinder = DistanceSensor::new(trigger, Delay, &ECHO);

    // IR proximity on A0 (PA0)
    let profile = ACTIVE_PROFILE;
    let pull = match profile.proximity_polarity {
        Polarity::ActiveHigh => Pull::None,
        Polarity::ActiveLow => Pull::Down,
    };
    let proximity = ProximitySensor::new(Input::new(p.PA0, pull), profile.proximity_polarity);

    info!("Sensors initialized ({})", profile);

    // Host link on LPUART1 (ST-LINK VCP, PA2 TX / PA3 RX)
    let serial = unwrap!(BufferedUart::new(
        p.LPUART1,
        Irqs,
        p.PA3,
        p.PA2,
        TX_RING.init([0; UART_TX_RING_SIZE]),
        RX_RING.init([0; UART_RX_RING_SIZE]),
        host_serial_config(),
    ));

    info!("Host link at {} baud", SERIAL_BAUD);

    let engine = RoundEngine::new(
        profile,
        rangefinder,
        proximity,
        BlockingPacer,
        XorShift32::new(uptime_seed()),
    );
    let mut controller = Controller::new(HostLink::new(serial), engine);

    info!("Entering game loop");
    controller.run()
}

/// Echo edge task - times each echo pulse into `ECHO`
#[embassy_executor::task]
async fn echo_task(mut echo: ExtiInput<'static>) {
    watch_echo(&mut echo, &ECHO).await
}

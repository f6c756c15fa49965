//! Coin Flip entry point
//!
//! Wires page events to the flip ledger. The page owns the coin animation and
//! charts; this binary only records results and keeps the stat counters fresh.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent, MouseEvent};

    use coin_flip::charts::{RECENT_FLIPS, bias, bias_over_history};
    use coin_flip::platform::{LocalStorage, MemoryStorage, Storage};
    use coin_flip::{Coin, FlipLedger, FlipStats, Outcome, Settings};

    type Ledger = FlipLedger<Box<dyn Storage>>;

    /// App instance holding all state
    struct App {
        ledger: Ledger,
        coin: Coin,
        settings: Settings,
        /// A flip animation is in progress
        flipping: bool,
    }

    impl App {
        fn new(storage: Box<dyn Storage>, seed: u64) -> Self {
            let settings = Settings::load(&storage);
            Self {
                ledger: FlipLedger::new(storage),
                coin: Coin::new(seed),
                settings,
                flipping: false,
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Update stat counters in DOM
    fn render_stats(stats: &FlipStats) {
        let Some(document) = document() else {
            return;
        };
        set_text(&document, "stat-current-flips", &stats.current_flips.to_string());
        set_text(&document, "stat-current-streak", &stats.current_streak.to_string());
        set_text(&document, "stat-active-streak", &stats.active_streak.to_string());
        set_text(&document, "stat-history-flips", &stats.history_flips.to_string());
        set_text(&document, "stat-history-streak", &stats.history_streak.to_string());
    }

    /// Update the recent flips strip and both bias gauges
    fn render_session(ledger: &Ledger) {
        let Some(document) = document() else {
            return;
        };

        let (last, recent, current) = match ledger.session() {
            Some(session) => (
                session.last().map(|f| f.result.as_str()).unwrap_or(""),
                session
                    .recent(RECENT_FLIPS)
                    .iter()
                    .map(|f| f.result.as_code())
                    .collect::<Vec<_>>()
                    .join(" "),
                bias(&session.flips),
            ),
            None => ("", String::new(), bias(&[])),
        };
        let all_time = bias_over_history(ledger.history());

        set_text(&document, "last-result", last);
        set_text(&document, "recent-flips", &recent);
        set_text(&document, "bias-session", &format!("{:.1}% heads", current.percent_heads));
        set_text(&document, "bias-alltime", &format!("{:.1}% heads", all_time.percent_heads));
    }

    fn set_coin_class(class: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id("coin")) {
            let _ = el.set_attribute("class", class);
        }
    }

    /// Record the result once the animation has landed
    fn land(app: &Rc<RefCell<App>>, result: Outcome) {
        let mut a = app.borrow_mut();
        a.flipping = false;
        a.ledger.record_flip(result);
        render_session(&a.ledger);
        drop(a);

        set_coin_class(if result.is_heads() { "heads" } else { "tails" });
    }

    /// Start a flip. The coin decides the outcome up front; the ledger hears
    /// about it when the animation finishes.
    fn flip(app: Rc<RefCell<App>>) {
        let (result, duration) = {
            let mut a = app.borrow_mut();
            if a.flipping {
                return;
            }
            let result = a.coin.toss();
            let duration = a.settings.flip_duration_ms();
            if duration > 0 {
                a.flipping = true;
            }
            (result, duration)
        };

        if duration == 0 {
            land(&app, result);
            return;
        }

        set_coin_class("flipping");
        let Some(window) = web_sys::window() else {
            land(&app, result);
            return;
        };
        let app_clone = app.clone();
        let closure = Closure::once(move || land(&app_clone, result));
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                duration as i32,
            )
            .is_err()
        {
            log::warn!("Could not schedule flip animation, recording immediately");
            land(&app, result);
            return;
        }
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Coin Flip starting...");

        let storage: Box<dyn Storage> = match LocalStorage::new() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}, history will not survive a reload", e);
                Box::new(MemoryStorage::new())
            }
        };

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(storage, seed)));
        {
            let mut a = app.borrow_mut();
            a.ledger.subscribe(render_stats);
            a.ledger.initialize();
            render_session(&a.ledger);
        }

        log::info!("Coin seeded with: {}", seed);

        setup_input_handlers(app.clone());
        setup_session_buttons(app);

        // Hide loading indicator
        if let Some(loading) = document().and_then(|d| d.get_element_by_id("loading")) {
            let _ = loading.set_attribute("class", "hidden");
        }

        log::info!("Coin Flip running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Click the coin
        if let Some(coin) = document().and_then(|d| d.get_element_by_id("coin")) {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                flip(app.clone());
            });
            let _ = coin.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Space bar
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == " " && !event.repeat() {
                    event.prevent_default();
                    flip(app.clone());
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_session_buttons(app: Rc<RefCell<App>>) {
        let Some(document) = document() else {
            return;
        };

        // New session
        if let Some(btn) = document.get_element_by_id("new-session-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.ledger.start_new_session();
                render_session(&a.ledger);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Clear history (irreversible)
        if let Some(btn) = document.get_element_by_id("clear-history-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let confirm = app.borrow().settings.confirm_clear;
                if confirm {
                    let confirmed = web_sys::window()
                        .and_then(|w| {
                            w.confirm_with_message("Delete every recorded flip? This cannot be undone.")
                                .ok()
                        })
                        .unwrap_or(false);
                    if !confirmed {
                        return;
                    }
                }

                let mut a = app.borrow_mut();
                a.ledger.clear_history();
                // Keep a session open for the next flip
                a.ledger.start_new_session();
                render_session(&a.ledger);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use coin_flip::charts::streak_frequencies;
    use coin_flip::platform::MemoryStorage;
    use coin_flip::{Coin, FlipLedger};

    env_logger::init();
    log::info!("Coin Flip (native) starting...");
    log::info!("The coin lives in the browser - run with `trunk serve` for the web version");

    // Quick demo against in-memory storage
    let mut ledger = FlipLedger::new(MemoryStorage::new());
    ledger.initialize();
    let mut coin = Coin::from_entropy();
    for _ in 0..100 {
        ledger.record_flip(coin.toss());
    }

    let stats = ledger.stats();
    println!("\n100 flips (seed {}):", coin.seed());
    println!("  best heads streak: {}", stats.current_streak);
    println!("  heads streak now:  {}", stats.active_streak);
    if let Some(session) = ledger.session() {
        for f in streak_frequencies(&session.flips) {
            println!("  {:>2} in a row: {}", f.streak_length, f.frequency);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

use leptos::*;

use crate::domain::{Action, logging::LogComponent};
use crate::global_state::{dispatch, globals, select};
use crate::infrastructure::dom;
use crate::log_debug;
use crate::presentation::{
    catalog::{CatalogSection, CompareBar, ComparisonModal, QuickSearch, VehicleModal},
    chat::ChatWidget,
    contacts::ContactsSection,
    credit::CreditSection,
    header::{ContactBar, Hero, Navigation},
    leads::LeadModal,
    sections::{AboutSection, Benefits, FaqSection, Footer, ReviewsSection, TradeInSection},
    widgets::NoticeToast,
};

/// Escape closes the top-most overlay: lead form, then vehicle, then comparison, then chat.
fn close_top_overlay() {
    let action = globals().state.with_untracked(|s| {
        if s.lead_modal.is_some() {
            Some(Action::CloseLead)
        } else if s.selected_vehicle.is_some() {
            Some(Action::CloseVehicle)
        } else if s.comparison_open {
            Some(Action::CloseComparison)
        } else if s.chat.open {
            Some(Action::ToggleChat)
        } else {
            None
        }
    });
    if let Some(action) = action {
        dispatch(action);
    }
}

/// 🚗 Root component of the dealership page
#[component]
pub fn App() -> impl IntoView {
    let modal_open = select(|s| s.lead_modal.is_some() || s.selected_vehicle.is_some() || s.comparison_open);

    create_effect(move |_| {
        let locked = modal_open.get();
        log_debug!(LogComponent::Presentation("App"), "Body scroll lock: {}", locked);
        dom::set_body_scroll_locked(locked);
    });

    let escape = window_event_listener(ev::keydown, |event| {
        if event.key() == "Escape" {
            close_top_overlay();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <style>
            {r#"
            :root {
                --gold: #d4af37;
                --gold-light: #f4d03f;
                --bg: #0a0a0a;
                --panel: #141414;
                --panel-alt: #1c1c1c;
                --text: #f5f5f5;
                --muted: #9a9a9a;
                --border: rgba(255, 255, 255, 0.08);
            }

            * { box-sizing: border-box; }

            body {
                margin: 0;
                font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
                background: var(--bg);
                color: var(--text);
            }

            a { color: inherit; text-decoration: none; }
            h1, h2, h3 { margin: 0 0 12px; }
            .muted { color: var(--muted); }
            .gold { color: var(--gold); }
            .container { max-width: 1200px; margin: 0 auto; padding: 0 20px; }
            .narrow { max-width: 820px; }
            .glyph { display: inline-block; vertical-align: middle; }
            .spin { animation: spin 1s linear infinite; }
            @keyframes spin { to { transform: rotate(360deg); } }

            .btn {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 8px;
                padding: 12px 22px;
                border-radius: 10px;
                border: 1px solid transparent;
                font-weight: 600;
                cursor: pointer;
                transition: transform 0.2s, box-shadow 0.2s;
            }
            .btn:disabled { opacity: 0.6; cursor: wait; }
            .btn-gold { background: linear-gradient(135deg, var(--gold), var(--gold-light)); color: #111; }
            .btn-gold:hover { box-shadow: 0 8px 24px rgba(212, 175, 55, 0.35); }
            .btn-outline { background: transparent; color: var(--text); border-color: var(--gold); }
            .btn-block { width: 100%; }
            .link-btn { background: none; border: none; color: var(--gold); cursor: pointer; padding: 0; }
            .icon-btn {
                display: inline-flex;
                padding: 8px;
                border-radius: 50%;
                border: none;
                background: rgba(0, 0, 0, 0.55);
                cursor: pointer;
            }
            .icon-btn.active { background: var(--gold); }

            .contact-bar { background: #000; font-size: 13px; padding: 8px 0; }
            .contact-bar-inner { display: flex; gap: 24px; justify-content: flex-end; flex-wrap: wrap; }
            .contact-item { display: inline-flex; gap: 6px; align-items: center; color: var(--muted); }

            .nav {
                position: sticky;
                top: 0;
                z-index: 50;
                background: rgba(10, 10, 10, 0.92);
                backdrop-filter: blur(12px);
                border-bottom: 1px solid var(--border);
            }
            .nav-inner { display: flex; align-items: center; gap: 24px; height: 72px; }
            .logo { display: inline-flex; align-items: center; gap: 8px; font-size: 20px; }
            .logo b { color: var(--gold); }
            .nav-links { display: flex; gap: 20px; margin-left: auto; }
            .nav-link { color: var(--muted); }
            .nav-link.active, .nav-link:hover { color: var(--gold); }
            .nav-burger { display: none; background: none; border: none; cursor: pointer; }
            .nav-mobile { display: flex; flex-direction: column; gap: 12px; padding: 16px 20px; }

            .hero { padding: 96px 0 64px; background: radial-gradient(circle at top right, #2a230c, var(--bg) 60%); }
            .hero h1 { font-size: 52px; line-height: 1.1; max-width: 760px; }
            .hero-badge { display: inline-flex; gap: 8px; align-items: center; color: var(--gold); margin-bottom: 16px; }
            .hero-lead { color: var(--muted); font-size: 18px; max-width: 620px; }
            .hero-actions { display: flex; gap: 16px; margin: 28px 0 48px; flex-wrap: wrap; }
            .hero-stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; }
            .stat-value { font-size: 34px; font-weight: 700; color: var(--gold); }
            .stat-label { color: var(--muted); font-size: 14px; }

            .quick-search {
                margin-top: -32px;
                background: var(--panel);
                border: 1px solid var(--border);
                border-radius: 16px;
                padding: 24px;
            }
            .quick-search-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-bottom: 16px; }
            .field {
                width: 100%;
                padding: 12px 14px;
                border-radius: 10px;
                border: 1px solid var(--border);
                background: var(--panel-alt);
                color: var(--text);
            }

            .section { padding: 80px 0; }
            .section-alt { background: var(--panel); }
            .section-head { margin-bottom: 32px; }
            .two-col { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: start; }

            .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 24px; }
            .card { background: var(--panel); border: 1px solid var(--border); border-radius: 16px; overflow: hidden; }
            .card-media { position: relative; aspect-ratio: 16 / 10; }
            .card-media img { width: 100%; height: 100%; object-fit: cover; }
            .card-actions { position: absolute; top: 12px; right: 12px; display: flex; gap: 8px; }
            .badge { position: absolute; left: 12px; padding: 4px 10px; border-radius: 6px; font-size: 12px; font-weight: 700; }
            .badge-sale { top: 12px; background: #c0392b; }
            .badge-condition { bottom: 12px; background: rgba(0, 0, 0, 0.7); }
            .details .badge { position: static; }
            .card-body { padding: 20px; }
            .card-meta { display: flex; gap: 12px; flex-wrap: wrap; color: var(--muted); font-size: 14px; margin-bottom: 12px; }
            .card-price { display: flex; align-items: baseline; gap: 12px; margin-bottom: 16px; }
            .price { font-size: 22px; font-weight: 700; color: var(--gold); }
            .old-price { color: var(--muted); text-decoration: line-through; }
            .empty { text-align: center; padding: 64px 0; }

            .compare-fab {
                position: fixed;
                left: 24px;
                bottom: 24px;
                z-index: 40;
                display: inline-flex;
                gap: 8px;
                align-items: center;
                padding: 14px 20px;
                border-radius: 999px;
                border: none;
                background: var(--gold);
                font-weight: 700;
                cursor: pointer;
            }
            .table-scroll { overflow-x: auto; margin-bottom: 20px; }
            .compare-table { width: 100%; border-collapse: collapse; }
            .compare-table th, .compare-table td { padding: 12px; border-bottom: 1px solid var(--border); text-align: left; }
            .compare-table img { width: 140px; border-radius: 8px; }

            .slider { display: block; margin: 24px 0; }
            .slider input { width: 100%; accent-color: var(--gold); }
            .slider-head { display: flex; justify-content: space-between; margin-bottom: 8px; }
            .term-buttons { display: flex; gap: 8px; flex-wrap: wrap; }
            .term { padding: 10px 16px; border-radius: 8px; border: 1px solid var(--border); background: var(--panel-alt); color: var(--text); cursor: pointer; }
            .term.active { background: var(--gold); color: #111; }
            .payment-card { background: var(--panel-alt); border-radius: 16px; padding: 32px; border: 1px solid var(--gold); }
            .payment { font-size: 44px; font-weight: 800; color: var(--gold); margin: 8px 0 24px; }
            .payment-breakdown div, .specs div { display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid var(--border); }
            .payment-breakdown dd, .specs dd { margin: 0; font-weight: 600; }

            .benefits, .steps, .reviews { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; }
            .benefit, .step, .review { background: var(--panel); border: 1px solid var(--border); border-radius: 16px; padding: 24px; margin: 0; }
            .step-number { display: block; color: var(--gold); font-size: 28px; font-weight: 800; }
            .facts { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
            .fact { display: flex; flex-direction: column; gap: 6px; background: var(--panel-alt); padding: 20px; border-radius: 12px; }
            .stars { display: flex; gap: 2px; margin-bottom: 12px; }
            .review blockquote { margin: 0 0 16px; }
            .review figcaption { display: flex; gap: 12px; align-items: center; }
            .review figcaption img { width: 48px; height: 48px; border-radius: 50%; object-fit: cover; }
            .review figcaption div { display: flex; flex-direction: column; }

            .faq { border-bottom: 1px solid var(--border); }
            .faq-question { width: 100%; display: flex; justify-content: space-between; gap: 16px; padding: 20px 0; background: none; border: none; color: var(--text); font-size: 17px; text-align: left; cursor: pointer; }
            .faq.open .faq-question { color: var(--gold); }
            .faq-answer { color: var(--muted); margin: 0 0 20px; }

            .contacts { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 18px; }
            .contacts li { display: flex; gap: 14px; align-items: center; }
            .contacts li div { display: flex; flex-direction: column; }
            .messengers { display: flex; gap: 12px; flex-wrap: wrap; }
            .map { width: 100%; height: 420px; border-radius: 16px; overflow: hidden; background: var(--panel-alt); }

            .footer { border-top: 1px solid var(--border); padding: 40px 0 24px; }
            .footer-inner { display: flex; justify-content: space-between; gap: 24px; flex-wrap: wrap; }
            .footer-contacts { display: flex; flex-direction: column; gap: 8px; }
            .footer-copy { margin-top: 24px; font-size: 13px; }

            .modal-backdrop {
                position: fixed;
                inset: 0;
                z-index: 100;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 20px;
                background: rgba(0, 0, 0, 0.75);
            }
            .modal-panel {
                position: relative;
                width: 100%;
                max-width: 480px;
                max-height: 90vh;
                overflow-y: auto;
                background: var(--panel);
                border: 1px solid var(--border);
                border-radius: 18px;
                padding: 32px;
            }
            .modal-panel.wide { max-width: 980px; }
            .modal-close { position: absolute; top: 14px; right: 14px; background: none; border: none; cursor: pointer; }
            .details { display: grid; grid-template-columns: 1fr 1fr; gap: 28px; }
            .details-image { width: 100%; border-radius: 12px; object-fit: cover; }
            .features { list-style: none; padding: 0; display: grid; grid-template-columns: 1fr 1fr; gap: 6px; }
            .details-actions { display: flex; gap: 12px; flex-wrap: wrap; margin-top: 20px; }

            .lead-form { display: flex; flex-direction: column; gap: 14px; }
            .form-row { display: flex; flex-direction: column; gap: 6px; color: var(--muted); font-size: 14px; }
            .form-error { display: flex; gap: 8px; align-items: center; color: #e74c3c; margin: 0; }
            .lead-success { text-align: center; display: flex; flex-direction: column; align-items: center; gap: 12px; }

            .notice {
                position: fixed;
                top: 88px;
                left: 50%;
                transform: translateX(-50%);
                z-index: 120;
                display: flex;
                gap: 10px;
                align-items: center;
                padding: 12px 16px;
                border-radius: 10px;
                background: #2c2410;
                border: 1px solid var(--gold);
            }
            .notice-close { background: none; border: none; cursor: pointer; }

            .chat { position: fixed; right: 24px; bottom: 24px; z-index: 90; display: flex; flex-direction: column; align-items: flex-end; gap: 12px; }
            .chat-toggle { width: 60px; height: 60px; border-radius: 50%; border: none; background: var(--gold); cursor: pointer; }
            .chat-panel { width: 340px; height: 460px; display: flex; flex-direction: column; background: var(--panel); border: 1px solid var(--border); border-radius: 16px; overflow: hidden; }
            .chat-head { display: flex; gap: 10px; align-items: center; padding: 14px; background: var(--panel-alt); }
            .chat-head div { display: flex; flex-direction: column; flex: 1; }
            .chat-log { flex: 1; overflow-y: auto; padding: 14px; display: flex; flex-direction: column; gap: 8px; }
            .bubble { max-width: 85%; padding: 10px 12px; border-radius: 12px; background: var(--panel-alt); font-size: 14px; }
            .bubble.user { align-self: flex-end; background: var(--gold); color: #111; }
            .bubble.typing { display: flex; gap: 4px; }
            .bubble.typing span { width: 6px; height: 6px; border-radius: 50%; background: var(--muted); animation: blink 1.2s infinite; }
            .bubble.typing span:nth-child(2) { animation-delay: 0.2s; }
            .bubble.typing span:nth-child(3) { animation-delay: 0.4s; }
            @keyframes blink { 50% { opacity: 0.2; } }
            .chat-input { display: flex; gap: 8px; padding: 12px; border-top: 1px solid var(--border); }

            @media (max-width: 900px) {
                .nav-links, .nav-cta { display: none; }
                .nav-burger { display: inline-flex; margin-left: auto; }
                .hero h1 { font-size: 36px; }
                .hero-stats, .quick-search-grid { grid-template-columns: 1fr 1fr; }
                .two-col, .details { grid-template-columns: 1fr; }
                .chat-panel { width: calc(100vw - 48px); }
            }
            "#}
        </style>
        <div class="premium-auto">
            <ContactBar />
            <Navigation />
            <main>
                <Hero />
                <div class="container">
                    <QuickSearch />
                </div>
                <CatalogSection />
                <Benefits />
                <CreditSection />
                <TradeInSection />
                <AboutSection />
                <ReviewsSection />
                <FaqSection />
                <ContactsSection />
            </main>
            <Footer />
            <CompareBar />
            <ComparisonModal />
            <VehicleModal />
            <LeadModal />
            <NoticeToast />
            <ChatWidget />
        </div>
    }
}

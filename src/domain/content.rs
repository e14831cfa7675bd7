//! Marketing copy: reviews, FAQ, benefits, stats and navigation.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

use crate::domain::icons::Icon;

/// Page anchors, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Home,
    Catalog,
    Credit,
    TradeIn,
    About,
    Reviews,
    Contacts,
}

impl Section {
    /// DOM id of the section element.
    pub fn anchor(&self) -> &'static str {
        self.into()
    }

    /// Label in the top navigation; `None` for sections not listed there.
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Catalog => Some("Каталог"),
            Self::Credit => Some("Кредит"),
            Self::TradeIn => Some("Trade-in"),
            Self::About => Some("О нас"),
            Self::Reviews => Some("Отзывы"),
            Self::Contacts => Some("Контакты"),
        }
    }
}

pub struct Review {
    pub name: &'static str,
    pub car: &'static str,
    pub text: &'static str,
    pub rating: u8,
    pub image: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        name: "Александр М.",
        car: "BMW X5 2023",
        text: "Отличный сервис! Купил машину за один день, все документы оформили быстро. Особенно понравился тест-драйв без ограничений.",
        rating: 5,
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&q=80",
    },
    Review {
        name: "Елена К.",
        car: "Mercedes E-Class",
        text: "Профессиональные менеджеры, не навязчивые. Помогли выбрать именно то, что нужно. Кредит одобрили за 10 минут!",
        rating: 5,
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=200&q=80",
    },
    Review {
        name: "Дмитрий В.",
        car: "Audi Q7",
        text: "Обменял старый автомобиль по Trade-in. Оценка была честная, выше чем в других салонах. Рекомендую!",
        rating: 5,
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=200&q=80",
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Какие документы нужны для покупки автомобиля?",
        answer: "Для покупки необходим только паспорт гражданина РФ. При оформлении кредита потребуется второй документ (СНИЛС, ИНН или водительское удостоверение) и справка о доходах (не всегда обязательна).",
    },
    FaqEntry {
        question: "Можно ли купить автомобиль в кредит без первоначального взноса?",
        answer: "Да, мы сотрудничаем с банками, которые предоставляют кредит без первоначального взноса. Процентная ставка от 4.9% годовых, одобрение за 5 минут.",
    },
    FaqEntry {
        question: "Как работает программа Trade-in?",
        answer: "Вы пригоняете свой автомобиль, мы проводим бесплатную оценку (15-20 минут), называем честную цену. Эта сумма идет в зачет нового автомобиля. Доплату можно внести наличными или оформить в кредит.",
    },
    FaqEntry {
        question: "Предоставляется ли гарантия на подержанные автомобили?",
        answer: "Да, на все автомобили с пробегом мы предоставляем расширенную гарантию до 2 лет или 100 000 км. Гарантия распространяется на двигатель, КПП и электронику.",
    },
    FaqEntry {
        question: "Можно ли записаться на тест-драйв?",
        answer: "Конечно! Записаться можно через сайт, по телефону или в мессенджерах. Доступен выездной тест-драйв — мы привезем автомобиль к вам.",
    },
];

pub struct Benefit {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit { icon: Icon::ShieldCheck, title: "Гарантия качества", description: "Проверка каждого авто по 120 параметрам" },
    Benefit { icon: Icon::BadgeCheck, title: "Юридическая чистота", description: "Полная проверка документов и истории" },
    Benefit { icon: Icon::Wrench, title: "Сервисное обслуживание", description: "Собственный центр с лучшими мастерами" },
    Benefit { icon: Icon::RefreshCw, title: "Trade-in", description: "Выгодный обмен с доплатой до 100 000 ₽" },
];

pub struct Stat {
    pub value: u64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: 1500, suffix: "+", label: "Авто в наличии" },
    Stat { value: 15, suffix: "", label: "Лет на рынке" },
    Stat { value: 50_000, suffix: "+", label: "Довольных клиентов" },
    Stat { value: 98, suffix: "%", label: "Одобрение кредита" },
];

/// Count-up animation value: `floor(progress * end)` with progress clamped to [0, 1].
pub fn count_up_value(end: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    if duration_ms <= 0.0 {
        return end;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (progress * end as f64).floor() as u64
}

/// True once the count-up has shown its final value and the ticker can stop.
pub fn count_up_finished(elapsed_ms: f64, duration_ms: f64) -> bool {
    elapsed_ms >= duration_ms
}

//! Every glyph the site draws. Unknown names cannot be expressed.

crate::icon_set! {
    pub enum Icon {
        AlertCircle => "alert-circle",
        ArrowRight => "arrow-right",
        Award => "award",
        BadgeCheck => "badge-check",
        Bot => "bot",
        Car => "car",
        Check => "check",
        CheckCircle => "check-circle",
        ChevronDown => "chevron-down",
        ChevronUp => "chevron-up",
        Clock => "clock",
        Close => "x",
        Compare => "git-compare",
        Fuel => "fuel",
        Gauge => "gauge",
        Heart => "heart",
        Loader => "loader-2",
        Mail => "mail",
        MapPin => "map-pin",
        Menu => "menu",
        MessageCircle => "message-circle",
        MessageSquare => "message-square",
        Phone => "phone",
        RefreshCw => "refresh-cw",
        Search => "search",
        SearchX => "search-x",
        Send => "send",
        Settings => "settings-2",
        ShieldCheck => "shield-check",
        Sparkles => "sparkles",
        Star => "star",
        TrendingUp => "trending-up",
        Trophy => "trophy",
        Users => "users",
        Wrench => "wrench",
        Zap => "zap",
    }
}

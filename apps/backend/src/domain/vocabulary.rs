//! Embedded default vocabulary: common English words, lowercase ASCII,
//! three letters or longer.

pub const WORDS: &[&str] = &[
    "the", "and", "for", "that", "this", "with", "you", "not", "are", "from", "your", "all",
    "have", "new", "more", "was", "will", "home", "can", "about", "page", "has", "search",
    "free", "but", "our", "one", "other", "information", "time", "they", "site", "may", "what",
    "which", "their", "news", "out", "use", "any", "there", "see", "only", "his", "when",
    "contact", "here", "business", "who", "web", "also", "now", "help", "get", "view",
    "online", "first", "been", "would", "how", "were", "services", "some", "these", "click",
    "its", "like", "service", "than", "find", "price", "date", "back", "top", "people", "had",
    "list", "name", "just", "over", "state", "year", "day", "into", "email", "two", "health",
    "world", "next", "used", "work", "last", "most", "products", "music", "buy", "data",
    "make", "them", "should", "product", "system", "post", "her", "city", "add", "policy",
    "number", "such", "please", "available", "copyright", "support", "message", "after",
    "best", "software", "then", "good", "video", "well", "where", "info", "rights", "public",
    "books", "high", "school", "through", "each", "links", "she", "review", "years", "order",
    "very", "privacy", "book", "items", "company", "read", "group", "need", "many", "user",
    "said", "does", "set", "under", "general", "research", "university", "january", "mail",
    "full", "map", "reviews", "program", "life", "know", "games", "way", "days", "management",
    "part", "could", "great", "united", "hotel", "real", "item", "international", "center",
    "must", "store", "travel", "comments", "made", "development", "report", "off", "member",
    "details", "line", "terms", "before", "hotels", "did", "send", "right", "type", "because",
    "local", "those", "using", "results", "office", "education", "national", "car", "design",
    "take", "posted", "internet", "address", "community", "within", "states", "area", "want",
    "phone", "shipping", "reserved", "subject", "between", "forum", "family", "long", "based",
    "code", "show", "even", "black", "check", "special", "prices", "website", "index", "being",
    "much", "sign", "file", "link", "open", "today", "technology", "south", "case", "project",
    "same", "pages", "version", "section", "own", "found", "sports", "house", "related",
    "security", "both", "county", "american", "photo", "game", "members", "power", "while",
    "care", "network", "down", "computer", "systems", "three", "total", "place", "end",
    "following", "download", "him", "without", "per", "access", "think", "north", "resources",
    "current", "posts", "big", "media", "law", "control", "water", "history", "pictures",
    "size", "art", "personal", "since", "including", "guide", "shop", "directory", "board",
    "location", "change", "white", "text", "small", "rating", "rate", "government", "children",
    "during", "return", "students", "shopping", "account", "times", "sites", "level",
    "digital", "profile", "previous", "form", "events", "old", "john", "main", "call", "hours",
    "image", "department", "title", "description", "non", "insurance", "another", "why",
    "shall", "property", "class", "still", "money", "quality", "every", "listing", "content",
    "country", "private", "little", "visit", "save", "tools", "low", "reply", "customer",
    "december", "compare", "movies", "include", "college", "value", "article", "york", "man",
    "card", "jobs", "provide", "food", "source", "author", "different", "press", "learn",
    "sale", "around", "print", "course", "job", "canada", "process", "room", "stock",
    "training", "too", "credit", "point", "join", "science", "categories", "advanced", "west",
    "sales", "look", "english", "left", "team", "estate", "box", "conditions", "select",
    "windows", "photos", "thread", "week", "category", "note", "live", "large", "gallery",
    "table", "register", "however", "june", "october", "november", "market", "library",
    "really", "action", "start", "series", "model", "features", "air", "industry", "plan",
    "human", "provided", "yes", "required", "second", "accessories", "cost", "movie", "forums",
    "march", "september", "better", "say", "questions", "july", "going", "medical", "test",
    "friend", "come", "server", "study", "application", "cart", "staff", "articles",
    "feedback", "again", "play", "looking", "issues", "april", "never", "users", "complete",
    "street", "topic", "comment", "financial", "things", "working", "against", "standard",
    "tax", "person", "below", "mobile", "less", "got", "blog", "party", "payment", "equipment",
    "login", "student", "let", "programs", "offers", "legal", "above", "recent", "park",
    "stores", "side", "act", "problem", "red", "give", "memory", "performance", "social",
    "august", "quote", "language", "story", "sell", "options", "experience", "rates", "create",
    "key", "body", "young", "america", "important", "field", "few", "east", "paper", "single",
    "age", "activities", "club", "example", "additional", "password", "latest", "something",
    "road", "gift", "question", "changes", "night", "hard", "texas", "pay", "four", "poker",
    "status", "browse", "issue", "range", "building", "seller", "court", "february", "always",
    "result", "audio", "light", "write", "war", "offer", "blue", "groups", "easy", "given",
    "files", "event", "release", "analysis", "request", "china", "making", "picture", "needs",
    "possible", "might", "professional", "yet", "month", "major", "star", "areas", "future",
    "space", "committee", "hand", "sun", "cards", "problems", "london", "washington",
    "meeting", "become", "interest", "child", "keep", "enter", "california", "share",
    "similar", "garden", "schools", "million", "added", "reference", "companies", "listed",
    "learning",
];

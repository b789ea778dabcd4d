// YouTube URL normalization for the project-demo lightbox. Shareable links
// come in several shapes; the lightbox always embeds
// `https://www.youtube.com/embed/<id>?autoplay=1&rel=0[&start=N]`.

/// Parse a compound duration token (`1h2m3s`, `7m37s`, `457s`) or a bare
/// integer of seconds. Anything unrecognized contributes 0.
pub fn parse_time_to_seconds(t: &str) -> u32 {
    if !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()) {
        return t.parse().unwrap_or(0);
    }
    let mut total = 0u32;
    let mut num = 0u32;
    let mut has_digits = false;
    for c in t.chars() {
        match c {
            '0'..='9' => {
                num = num.saturating_mul(10).saturating_add(c as u32 - '0' as u32);
                has_digits = true;
            }
            'h' | 'm' | 's' if has_digits => {
                let unit = match c {
                    'h' => 3600,
                    'm' => 60,
                    _ => 1,
                };
                total = total.saturating_add(num.saturating_mul(unit));
                num = 0;
                has_digits = false;
            }
            _ => break,
        }
    }
    total
}

struct SplitUrl<'a> {
    host: &'a str,
    path: &'a str,
    query: &'a str,
}

fn split_url(url: &str) -> Option<SplitUrl<'_>> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let (host, tail) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    if host.is_empty() {
        return None;
    }
    let (path, query) = match tail.find('?') {
        Some(i) => (&tail[..i], &tail[i + 1..]),
        None => (tail, ""),
    };
    Some(SplitUrl { host, path, query })
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then_some(v)
    })
}

/// Rewrite a shareable YouTube URL into an embeddable one with autoplay and
/// an optional start offset. Long-form (`/watch?v=<id>&t=<time>`), embed-form
/// (`/embed/<id>?start=<time>`) and short-form (`youtu.be/<id>?t=<time>`) are
/// recognized; anything else is returned unchanged.
pub fn to_embed_url(url: &str) -> String {
    let Some(parts) = split_url(url) else {
        return url.to_string();
    };

    let (id, start) = if parts.host.contains("youtube.com") {
        if parts.path == "/watch" {
            (
                query_param(parts.query, "v").unwrap_or(""),
                query_param(parts.query, "t").map_or(0, parse_time_to_seconds),
            )
        } else if parts.path.starts_with("/embed/") {
            (
                parts.path.rsplit('/').next().unwrap_or(""),
                query_param(parts.query, "start").map_or(0, parse_time_to_seconds),
            )
        } else {
            ("", 0)
        }
    } else if parts.host == "youtu.be" {
        (
            parts.path.trim_start_matches('/'),
            query_param(parts.query, "t").map_or(0, parse_time_to_seconds),
        )
    } else {
        ("", 0)
    };

    if id.is_empty() {
        return url.to_string();
    }
    let mut embed = format!("https://www.youtube.com/embed/{id}?autoplay=1&rel=0");
    if start > 0 {
        embed.push_str(&format!("&start={start}"));
    }
    embed
}

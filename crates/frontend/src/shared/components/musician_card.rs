use contracts::domain::a004_musician::Musician;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Card};

/// Profile summary of another musician. `children` renders the action row
/// (connect, accept, ...).
#[component]
pub fn MusicianCard(musician: Musician, children: Children) -> impl IntoView {
    let mutual = match musician.mutual_connections {
        0 => None,
        1 => Some("1 mutual connection".to_string()),
        n => Some(format!("{} mutual connections", n)),
    };

    view! {
        <Card>
            <div class="musician-card">
                <div class="musician-card__avatar" aria-hidden="true">{musician.initials()}</div>
                <div class="musician-card__body">
                    <div class="musician-card__name">{musician.name.clone()}</div>
                    <div class="musician-card__meta">
                        {format!("{} · {}", musician.instrument, musician.city)}
                    </div>
                    <div class="musician-card__genres">
                        {musician.genres.into_iter().map(|genre| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                {genre}
                            </Badge>
                        }).collect_view()}
                    </div>
                    {mutual.map(|m| view! { <div class="musician-card__mutual">{m}</div> })}
                </div>
                <div class="musician-card__actions">{children()}</div>
            </div>
        </Card>
    }
}

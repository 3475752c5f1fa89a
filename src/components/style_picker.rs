use yew::prelude::*;

use crate::components::card_stack::DisplayCard;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShoeStyle {
    Business,
    Running,
    Street,
}

impl ShoeStyle {
    pub const ALL: [ShoeStyle; 3] = [ShoeStyle::Business, ShoeStyle::Running, ShoeStyle::Street];

    pub fn key(self) -> &'static str {
        match self {
            ShoeStyle::Business => "business",
            ShoeStyle::Running => "running",
            ShoeStyle::Street => "street",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShoeStyle::Business => "Business",
            ShoeStyle::Running => "Running",
            ShoeStyle::Street => "Street",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ShoeStyle::Business => "At SoleSavvy, our business category is designed for the modern professional who values sustainability without compromising style or comfort. Our eco-friendly business shoes are crafted with premium materials such as recycled leather and natural fabrics, ensuring a polished look for any office setting. Each pair is engineered with advanced technology to provide all-day comfort and support, allowing you to focus on your work rather than your feet. In addition to being eco-friendly and stylish, our business shoes come in various classic designs that can easily be dressed up or down, ensuring a versatile addition to your wardrobe.",
            ShoeStyle::Running => "Our running category is for those who log the miles and still care where their gear comes from. SoleSavvy's eco-friendly running shoes pair responsive, lightweight cushioning with recycled mesh uppers and plant-based foams. Our running shoes undergo rigorous testing by professional runners to ensure they meet the highest standards of performance and durability while maintaining our commitment to sustainability.",
            ShoeStyle::Street => "Our street category is for those who appreciate fashion and sustainability in equal measures. SoleSavvy's eco-friendly street shoes are a perfect blend of style and substance, allowing you to make a statement while reducing your carbon footprint. Crafted with trendy designs using materials such as recycled denim, vegan leather, and organic cotton, these shoes are not only good for the planet but also add an edge to any outfit. Additionally, they provide comfort and versatility, making them suitable for everyday wear.",
        }
    }

    /// Cards shown in the stack while this style is selected.
    pub fn cards(self) -> Vec<DisplayCard> {
        let images: [&str; 4] = match self {
            ShoeStyle::Business => [
                "/shoes/business-light-brown.png",
                "/shoes/business-brown-leather.png",
                "/shoes/business-retro.png",
                "/shoes/business-black-leather.png",
            ],
            ShoeStyle::Running => [
                "/shoes/running-nike-blue.png",
                "/shoes/running-amgyang-hi-running-shoe.png",
                "/shoes/running-nike-pegasus-30.png",
                "/shoes/running-shoe-nike.png",
            ],
            ShoeStyle::Street => [
                "/shoes/street-adidas-superstars.png",
                "/shoes/street-nike-air-max-sneakers.png",
                "/shoes/street-nike-free.png",
                "/shoes/street-vans.png",
            ],
        };
        images
            .into_iter()
            .enumerate()
            .map(|(id, image)| {
                let card = DisplayCard::new(id as u32, image);
                if self == ShoeStyle::Street && id == 1 {
                    card.with_category("Street Shoes")
                } else {
                    card
                }
            })
            .collect()
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StylePickerProps {
    pub selected: ShoeStyle,
    pub on_select: Callback<ShoeStyle>,
}

#[function_component]
pub fn StylePicker(props: &StylePickerProps) -> Html {
    let picker_css = r#"
        .style-picker {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 2.5rem;
            font-size: 1.125rem;
            font-weight: 600;
        }
        .style-button {
            margin-bottom: 0.5rem;
            padding: 1rem 2rem;
            border-radius: 0.375rem;
            border: 1px solid rgba(0, 0, 0, 0.1);
            background: #f9fafb;
            opacity: 0.5;
            box-shadow: 0 4px 14px 0 rgba(0, 118, 255, 0.39);
            cursor: pointer;
            transition: transform 0.2s ease, box-shadow 0.2s ease;
        }
        .style-button:hover {
            transform: scale(1.05);
            box-shadow: 0 6px 20px rgba(0, 118, 255, 0.23);
        }
        .style-button:active {
            transform: scale(0.98);
        }
        .style-button.selected {
            border-color: #fff;
            background: #0369a1;
            opacity: 0.75;
        }
        .dark .style-button {
            color: #fff;
            background: #000;
        }
        .dark .style-button.selected {
            background: #0369a1;
        }
    "#;

    html! {
        <div class="style-picker">
            <style>{picker_css}</style>
            {
                ShoeStyle::ALL.into_iter().map(|style| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(style))
                    };
                    html! {
                        <button
                            key={style.key()}
                            class={classes!("style-button", (props.selected == style).then_some("selected"))}
                            {onclick}
                        >
                            {style.label()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_four_uniquely_numbered_cards() {
        for style in ShoeStyle::ALL {
            let cards = style.cards();
            let ids: Vec<u32> = cards.iter().map(|card| card.id).collect();
            assert_eq!(ids, vec![0, 1, 2, 3], "{}", style.label());
            assert!(cards.iter().all(|card| card.image.starts_with("/shoes/")));
        }
    }

    #[test]
    fn only_the_street_set_carries_a_category() {
        let street = ShoeStyle::Street.cards();
        assert_eq!(street[1].category.as_deref(), Some("Street Shoes"));
        assert!(ShoeStyle::Business.cards().iter().all(|card| card.category.is_none()));
    }

    #[test]
    fn descriptions_match_their_style() {
        for style in ShoeStyle::ALL {
            let description = style.description().to_lowercase();
            assert!(description.contains(style.key()), "{}", style.label());
        }
    }
}

use stellium::Sign;
use stellium_chart::{
    AssetResolver, Body, BodyPositions, CanvasSize, CenteredLayer, ChartGeometry,
    ConventionalAssets, Frame, NatalChart, PixelPoint, Placement, Renderer,
};

#[derive(Default)]
struct Recording {
    frames: Vec<(CanvasSize, Sign, f64, Vec<Placement>)>,
    layers: Vec<(CenteredLayer, CenteredLayer)>,
}

impl Renderer for Recording {
    type Output = usize;
    type Error = std::convert::Infallible;

    fn render(&mut self, frame: &Frame<'_>) -> Result<usize, Self::Error> {
        self.frames.push((
            frame.canvas,
            frame.ascendant,
            frame.rotation,
            frame.placements.to_vec(),
        ));
        self.layers.push((frame.house_numbers, frame.logo));
        Ok(frame.placements.len())
    }
}

struct Failing;

impl Renderer for Failing {
    type Output = ();
    type Error = String;

    fn render(&mut self, _frame: &Frame<'_>) -> Result<(), String> {
        Err("canvas too small".to_string())
    }
}

fn layout() -> stellium_chart::ChartLayout {
    let mut positions: BodyPositions = Body::ALL
        .into_iter()
        .enumerate()
        .map(|(i, b)| (b, i as f64 * 27.0))
        .collect();
    positions.insert(Body::Ascendant, 200.0);
    NatalChart::new(&positions)
        .unwrap()
        .layout(&ChartGeometry::default().spread_options())
        .unwrap()
}

#[test]
fn renderer_receives_the_whole_frame() {
    let layout = layout();
    let geometry = ChartGeometry::default();
    let canvas = CanvasSize::square(800);
    let mut recording = Recording::default();

    let drawn = layout
        .render_with(&mut recording, &geometry, canvas)
        .unwrap();
    assert_eq!(drawn, 13);
    assert_eq!(recording.frames.len(), 1);
    let (size, ascendant, rotation, placements) = &recording.frames[0];
    assert_eq!(*size, canvas);
    assert_eq!(*ascendant, Sign::Libra);
    assert_eq!(*rotation, -180.0);
    assert_eq!(placements, &layout.placements(&geometry, canvas));
}

#[test]
fn renderer_receives_the_centred_house_and_logo_layers() {
    let mut recording = Recording::default();
    layout()
        .render_with(
            &mut recording,
            &ChartGeometry::default(),
            CanvasSize::square(800),
        )
        .unwrap();
    let (house_numbers, logo) = recording.layers[0];
    assert_eq!(
        house_numbers,
        CenteredLayer {
            size: CanvasSize::square(360),
            origin: PixelPoint { x: 220, y: 220 },
        }
    );
    assert_eq!(
        logo,
        CenteredLayer {
            size: CanvasSize::square(56),
            origin: PixelPoint { x: 372, y: 372 },
        }
    );
}

#[test]
fn renderer_errors_are_returned_unchanged() {
    let err = layout()
        .render_with(&mut Failing, &ChartGeometry::default(), CanvasSize::square(10))
        .unwrap_err();
    assert_eq!(err, "canvas too small");
}

#[test]
fn conventional_assets_follow_the_sprite_layout() {
    let assets = ConventionalAssets::default();
    assert_eq!(assets.body_asset(Body::Sun).unwrap(), "planets/Sun.png");
    assert_eq!(
        assets.body_asset(Body::NorthNode).unwrap(),
        "planets/NorthNode.png"
    );
    assert_eq!(assets.sign_asset(Sign::Gemini).unwrap(), "signs/Gem.png");

    let rooted = ConventionalAssets::new("static/images/");
    assert_eq!(
        rooted.body_asset(Body::Ascendant).unwrap(),
        "static/images/planets/Asc.png"
    );
}

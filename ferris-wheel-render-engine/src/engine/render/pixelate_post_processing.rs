use bevy::{
    core_pipeline::{
        core_3d::graph::{Core3d, Node3d},
        fullscreen_vertex_shader::fullscreen_shader_vertex_state,
    },
    ecs::query::QueryItem,
    prelude::*,
    render::{
        RenderApp,
        extract_component::{
            ComponentUniforms, DynamicUniformIndex, ExtractComponent, ExtractComponentPlugin,
            UniformComponentPlugin,
        },
        render_graph::{
            NodeRunError, RenderGraphApp, RenderGraphContext, RenderLabel, ViewNode, ViewNodeRunner,
        },
        render_resource::{
            binding_types::{sampler, texture_2d, uniform_buffer},
            *,
        },
        renderer::{RenderContext, RenderDevice},
        view::ViewTarget,
    },
};
use constants::render_settings::{
    DEFAULT_DEPTH_EDGE_STRENGTH, DEFAULT_NORMAL_EDGE_STRENGTH, PIXEL_SIZE_RANGE,
};

const PIXELATE_SHADER_PATH: &str = "shaders/pixelate.wgsl";

/// Full-screen pixelation pass with edge darkening, run after tonemapping.
pub struct PixelatePostProcessPlugin;

impl Plugin for PixelatePostProcessPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            ExtractComponentPlugin::<PixelateSettings>::default(),
            UniformComponentPlugin::<PixelateSettings>::default(),
        ));

        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };

        render_app
            .add_render_graph_node::<ViewNodeRunner<PixelatePostProcessNode>>(
                Core3d,
                PixelatePostProcessLabel,
            )
            .add_render_graph_edges(
                Core3d,
                (
                    Node3d::Tonemapping,
                    PixelatePostProcessLabel,
                    Node3d::EndMainPassPostProcessing,
                ),
            );
    }

    fn finish(&self, app: &mut App) {
        let Some(render_app) = app.get_sub_app_mut(RenderApp) else {
            return;
        };

        render_app.init_resource::<PixelatePostProcessPipeline>();
    }
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, RenderLabel)]
struct PixelatePostProcessLabel;

/// Per-camera pass settings, uploaded as a 16 byte uniform.
#[derive(Component, Debug, Clone, Copy, PartialEq, ExtractComponent, ShaderType)]
pub struct PixelateSettings {
    /// Screen pixels per block, stored as float for the shader.
    pub pixel_size: f32,
    pub normal_edge_strength: f32,
    pub depth_edge_strength: f32,
    pub _padding: f32,
}

impl Default for PixelateSettings {
    fn default() -> Self {
        Self::new(PIXEL_SIZE_RANGE.0, DEFAULT_NORMAL_EDGE_STRENGTH)
    }
}

impl PixelateSettings {
    pub fn new(pixel_size: u32, normal_edge_strength: f32) -> Self {
        Self {
            pixel_size: pixel_size.max(1) as f32,
            normal_edge_strength,
            depth_edge_strength: DEFAULT_DEPTH_EDGE_STRENGTH,
            _padding: 0.0,
        }
    }

    /// One-pixel blocks with no edge emphasis leave the image unchanged.
    pub fn is_passthrough(&self) -> bool {
        self.pixel_size <= 1.0 && self.normal_edge_strength == 0.0 && self.depth_edge_strength == 0.0
    }
}

#[derive(Default)]
struct PixelatePostProcessNode;

impl ViewNode for PixelatePostProcessNode {
    type ViewQuery = (
        &'static ViewTarget,
        &'static PixelateSettings,
        &'static DynamicUniformIndex<PixelateSettings>,
    );

    fn run(
        &self,
        _graph: &mut RenderGraphContext,
        render_context: &mut RenderContext,
        (view_target, settings, settings_index): QueryItem<Self::ViewQuery>,
        world: &World,
    ) -> Result<(), NodeRunError> {
        if settings.is_passthrough() {
            return Ok(());
        }

        let pixelate_pipeline = world.resource::<PixelatePostProcessPipeline>();
        let pipeline_cache = world.resource::<PipelineCache>();

        let Some(pipeline) = pipeline_cache.get_render_pipeline(pixelate_pipeline.pipeline_id)
        else {
            return Ok(());
        };

        let settings_uniforms = world.resource::<ComponentUniforms<PixelateSettings>>();
        let Some(settings_binding) = settings_uniforms.uniforms().binding() else {
            return Ok(());
        };

        let post_process = view_target.post_process_write();

        let bind_group = render_context.render_device().create_bind_group(
            "pixelate_post_process_bind_group",
            &pixelate_pipeline.layout,
            &BindGroupEntries::sequential((
                post_process.source,
                &pixelate_pipeline.sampler,
                settings_binding.clone(),
            )),
        );

        let mut render_pass = render_context.begin_tracked_render_pass(RenderPassDescriptor {
            label: Some("pixelate_post_process_pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: post_process.destination,
                resolve_target: None,
                ops: Operations::default(),
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_render_pipeline(pipeline);
        render_pass.set_bind_group(0, &bind_group, &[settings_index.index()]);
        render_pass.draw(0..3, 0..1);

        Ok(())
    }
}

#[derive(Resource)]
struct PixelatePostProcessPipeline {
    layout: BindGroupLayout,
    sampler: Sampler,
    pipeline_id: CachedRenderPipelineId,
}

impl FromWorld for PixelatePostProcessPipeline {
    fn from_world(world: &mut World) -> Self {
        let render_device = world.resource::<RenderDevice>();

        let layout = render_device.create_bind_group_layout(
            "pixelate_post_process_bind_group_layout",
            &BindGroupLayoutEntries::sequential(
                ShaderStages::FRAGMENT,
                (
                    texture_2d(TextureSampleType::Float { filterable: false }),
                    sampler(SamplerBindingType::NonFiltering),
                    uniform_buffer::<PixelateSettings>(true),
                ),
            ),
        );

        // Nearest sampling keeps block edges hard.
        let sampler = render_device.create_sampler(&SamplerDescriptor {
            mag_filter: FilterMode::Nearest,
            min_filter: FilterMode::Nearest,
            ..default()
        });

        let shader = world.load_asset(PIXELATE_SHADER_PATH);

        let pipeline_id =
            world
                .resource_mut::<PipelineCache>()
                .queue_render_pipeline(RenderPipelineDescriptor {
                    label: Some("pixelate_post_process_pipeline".into()),
                    layout: vec![layout.clone()],
                    vertex: fullscreen_shader_vertex_state(),
                    fragment: Some(FragmentState {
                        shader,
                        shader_defs: vec![],
                        entry_point: "fragment".into(),
                        targets: vec![Some(ColorTargetState {
                            format: TextureFormat::bevy_default(),
                            blend: None,
                            write_mask: ColorWrites::ALL,
                        })],
                    }),
                    primitive: PrimitiveState::default(),
                    depth_stencil: None,
                    multisample: MultisampleState::default(),
                    push_constant_ranges: vec![],
                    zero_initialize_workgroup_memory: false,
                });

        Self {
            layout,
            sampler,
            pipeline_id,
        }
    }
}
